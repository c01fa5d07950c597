//! End-to-end cell rendering over a small hero/team/power fixture model.

use std::rc::Rc;

use listgrid_core::{
    ActionLink, AssociationCollection, AssociationInfo, AssociationKind, AssociationValue,
    AuthorizationGate, CollectionSource, CrudType, DefaultLocale, LinkAction, ListColumn,
    ListConfig, PermitAll, Record, Value,
};
use listgrid_render::{OverrideRegistry, RenderContext, render_cell};

struct Team {
    id: i64,
    name: &'static str,
}

impl Record for Team {
    fn entity_name(&self) -> &str {
        "Team"
    }

    fn id(&self) -> Option<Value> {
        Some(Value::Int(self.id))
    }

    fn get(&self, field: &str) -> Value {
        match field {
            "name" => Value::Text(self.name.to_string()),
            _ => Value::Null,
        }
    }

    fn to_label(&self) -> String {
        self.name.to_string()
    }

    fn association(&self, _name: &str) -> Option<AssociationValue<'_>> {
        None
    }
}

struct Power(&'static str);

impl Record for Power {
    fn entity_name(&self) -> &str {
        "Power"
    }

    fn id(&self) -> Option<Value> {
        None
    }

    fn get(&self, _field: &str) -> Value {
        Value::Null
    }

    fn to_label(&self) -> String {
        self.0.to_string()
    }

    fn association(&self, _name: &str) -> Option<AssociationValue<'_>> {
        None
    }
}

struct PowerSource {
    names: Vec<&'static str>,
}

impl CollectionSource for PowerSource {
    fn count(&self) -> usize {
        self.names.len()
    }

    fn fetch(&self, limit: usize, _columns: &[String]) -> Vec<Rc<dyn Record>> {
        self.names
            .iter()
            .take(limit)
            .map(|name| Rc::new(Power(name)) as Rc<dyn Record>)
            .collect()
    }
}

struct Hero {
    id: i64,
    name: &'static str,
    active: bool,
    team: Option<Team>,
    powers: Option<AssociationCollection>,
}

impl Hero {
    fn new(name: &'static str) -> Self {
        Self {
            id: 5,
            name,
            active: true,
            team: None,
            powers: None,
        }
    }

    fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    fn with_powers(mut self, powers: AssociationCollection) -> Self {
        self.powers = Some(powers);
        self
    }
}

impl Record for Hero {
    fn entity_name(&self) -> &str {
        "Hero"
    }

    fn id(&self) -> Option<Value> {
        Some(Value::Int(self.id))
    }

    fn get(&self, field: &str) -> Value {
        match field {
            "name" => Value::Text(self.name.to_string()),
            "active" => Value::Bool(self.active),
            _ => Value::Null,
        }
    }

    fn to_label(&self) -> String {
        self.name.to_string()
    }

    fn association(&self, name: &str) -> Option<AssociationValue<'_>> {
        match name {
            "team" => Some(AssociationValue::Singular(
                self.team.as_ref().map(|t| t as &dyn Record),
            )),
            "powers" => self.powers.as_ref().map(AssociationValue::Collection),
            _ => None,
        }
    }
}

fn powers_lazy(names: Vec<&'static str>) -> AssociationCollection {
    AssociationCollection::lazy(Box::new(PowerSource { names }))
}

fn powers_column() -> ListColumn {
    ListColumn::new("powers").association(AssociationInfo::new(
        "powers",
        AssociationKind::HasMany,
        "Power",
    ))
}

fn team_column() -> ListColumn {
    ListColumn::new("team").association(AssociationInfo::new(
        "team",
        AssociationKind::BelongsTo,
        "Team",
    ))
}

fn heroes_config() -> ListConfig {
    ListConfig::new("heroes", "Hero")
}

struct RecordDeny;

impl AuthorizationGate for RecordDeny {
    fn record_allows(&self, _record: &dyn Record, _action: CrudType, _column: Option<&str>) -> bool {
        false
    }

    fn entity_allows(&self, _entity: &str, _action: CrudType, _column: Option<&str>) -> bool {
        true
    }
}

struct DenyAll;

impl AuthorizationGate for DenyAll {
    fn record_allows(&self, _record: &dyn Record, _action: CrudType, _column: Option<&str>) -> bool {
        false
    }

    fn entity_allows(&self, _entity: &str, _action: CrudType, _column: Option<&str>) -> bool {
        false
    }
}

fn render_with<A: AuthorizationGate>(
    auth: &A,
    config: &ListConfig,
    record: &Hero,
    column: &ListColumn,
) -> String {
    let locale = DefaultLocale::new().with("true", "Yes");
    let overrides = OverrideRegistry::new();
    let ctx = RenderContext::new(config, auth, &locale, &overrides);
    render_cell(&ctx, record, column)
}

fn render(record: &Hero, column: &ListColumn) -> String {
    render_with(&PermitAll, &heroes_config(), record, column)
}

#[test]
fn test_plain_text_value_is_escaped() {
    let hero = Hero::new("Jane <script>");
    assert_eq!(render(&hero, &ListColumn::new("name")), "Jane &lt;script&gt;");
}

#[test]
fn test_boolean_uses_localized_token() {
    let hero = Hero::new("Jane");
    assert_eq!(render(&hero, &ListColumn::new("active")), "Yes");
}

#[test]
fn test_missing_field_shows_empty_field_text() {
    let hero = Hero::new("Jane");
    assert_eq!(render(&hero, &ListColumn::new("nickname")), "-");
}

#[test]
fn test_empty_value_without_empty_text_becomes_placeholder() {
    let config = heroes_config().empty_field_text("");
    let hero = Hero::new("Jane");
    let html = render_with(&PermitAll, &config, &hero, &ListColumn::new("nickname"));
    assert_eq!(html, "&nbsp;");
}

#[test]
fn test_plural_association_over_limit_gets_ellipsis_and_count() {
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2", "P3", "P4", "P5"]));
    let column = powers_column().associated_limit(Some(3));
    assert_eq!(render(&hero, &column), "P1, P2, P3, … (5)");
}

#[test]
fn test_plural_association_under_limit_lists_plainly() {
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2"]));
    let column = powers_column().associated_limit(Some(3));
    assert_eq!(render(&hero, &column), "P1, P2");
}

#[test]
fn test_zero_limit_with_count_shows_count_only() {
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2", "P3", "P4", "P5"]));
    let column = powers_column().associated_limit(Some(0));
    assert_eq!(render(&hero, &column), "5");
}

#[test]
fn test_zero_limit_without_count_becomes_placeholder() {
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2"]));
    let column = powers_column()
        .associated_limit(Some(0))
        .associated_number(false);
    assert_eq!(render(&hero, &column), "&nbsp;");
}

#[test]
fn test_no_limit_lists_all_labels_when_eager_loaded() {
    let records: Vec<Rc<dyn Record>> = vec![
        Rc::new(Power("P1")),
        Rc::new(Power("P2")),
        Rc::new(Power("P3")),
        Rc::new(Power("P4")),
        Rc::new(Power("P5")),
    ];
    let hero = Hero::new("Jane").with_powers(AssociationCollection::eager(records));
    let column = powers_column().associated_limit(None);
    assert_eq!(render(&hero, &column), "P1, P2, P3, P4, P5");
}

#[test]
fn test_empty_plural_association_shows_empty_field_text() {
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec![]));
    let column = powers_column().associated_limit(Some(3));
    assert_eq!(render(&hero, &column), "-");
}

#[test]
fn test_no_limit_lazy_association_shows_empty_field_text() {
    // without a preview limit nothing is fetched, so the cell renders like
    // an empty association
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2"]));
    let column = powers_column().associated_limit(None);
    assert_eq!(render(&hero, &column), "-");
}

#[test]
fn test_plural_cross_controller_link_rewrites_foreign_key() {
    // the id slot belongs to the associated record, which a plural column
    // does not have; this record rides along as a foreign-key parameter
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2"]));
    let column = powers_column()
        .link(ActionLink::new("index").controller("powers").crud_type(CrudType::Read));
    let html = render(&hero, &column);
    assert_eq!(html, "<a href=\"/powers/index?hero_id=5\" class=\"action\">P1, P2</a>");
}

#[test]
fn test_plural_link_denied_for_first_record_is_inert() {
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2"]));
    let column = powers_column()
        .link(ActionLink::new("index").controller("powers").crud_type(CrudType::Read));
    let html = render_with(&RecordDeny, &heroes_config(), &hero, &column);
    assert_eq!(html, "<a class=\"disabled\">P1, P2</a>");
    assert!(!html.contains("href"));
}

#[test]
fn test_plural_link_unloaded_window_falls_back_to_entity_grant() {
    // no limit keeps the window unloaded, so there is no first record to
    // check and authorization falls back to the entity kind
    let hero = Hero::new("Jane").with_powers(powers_lazy(vec!["P1", "P2"]));
    let column = powers_column()
        .associated_limit(None)
        .link(ActionLink::new("index").controller("powers").crud_type(CrudType::Read));
    let html = render_with(&RecordDeny, &heroes_config(), &hero, &column);
    assert_eq!(html, "<a href=\"/powers/index?hero_id=5\" class=\"action\">-</a>");
}

#[test]
fn test_singular_association_shows_label() {
    let hero = Hero::new("Jane").with_team(Team { id: 9, name: "Avengers" });
    assert_eq!(render(&hero, &team_column()), "Avengers");
}

#[test]
fn test_autolink_empty_association_links_to_create() {
    let hero = Hero::new("Jane");
    let column = team_column().autolink(ActionLink::new("show").controller("teams"));
    let html = render(&hero, &column);
    assert_eq!(html, "<a href=\"/teams/new?hero_id=5\" class=\"action\">Create New</a>");
}

#[test]
fn test_autolink_present_association_links_to_edit() {
    let hero = Hero::new("Jane").with_team(Team { id: 9, name: "Avengers" });
    let column = team_column().autolink(ActionLink::new("show").controller("teams"));
    let html = render(&hero, &column);
    assert_eq!(html, "<a href=\"/teams/edit/9?hero_id=5\" class=\"action\">Avengers</a>");
}

#[test]
fn test_autolink_nothing_permitted_renders_plain_text() {
    let hero = Hero::new("Jane").with_team(Team { id: 9, name: "Avengers" });
    let column = team_column()
        .autolink(ActionLink::new("show").controller("teams"))
        .association_link_actions(vec![]);
    let html = render(&hero, &column);
    assert_eq!(html, "Avengers");
}

#[test]
fn test_autolink_create_needs_record_update_grant() {
    struct EntityOnly;

    impl AuthorizationGate for EntityOnly {
        fn record_allows(
            &self,
            _record: &dyn Record,
            _action: CrudType,
            _column: Option<&str>,
        ) -> bool {
            false
        }

        fn entity_allows(&self, _entity: &str, _action: CrudType, _column: Option<&str>) -> bool {
            true
        }
    }

    let hero = Hero::new("Jane");
    let column = team_column().autolink(ActionLink::new("show").controller("teams"));
    let html = render_with(&EntityOnly, &heroes_config(), &hero, &column);
    assert!(html.starts_with("<a class=\"disabled\">"));
    assert!(!html.contains("href"));
}

#[test]
fn test_unauthorized_link_renders_inert_markup() {
    let hero = Hero::new("Jane");
    let column = ListColumn::new("name").link(ActionLink::new("show").crud_type(CrudType::Read));
    let html = render_with(&DenyAll, &heroes_config(), &hero, &column);
    assert_eq!(html, "<a class=\"disabled\">Jane</a>");
    assert!(!html.contains("href"));
}

#[test]
fn test_authorized_link_targets_current_controller() {
    let hero = Hero::new("Jane");
    let column = ListColumn::new("name").link(ActionLink::new("show").crud_type(CrudType::Read));
    let html = render(&hero, &column);
    assert_eq!(html, "<a href=\"/heroes/show/5\" class=\"action\">Jane</a>");
}

#[test]
fn test_show_fallback_when_edit_not_permitted() {
    let hero = Hero::new("Jane").with_team(Team { id: 9, name: "Avengers" });
    let column = team_column()
        .autolink(ActionLink::new("show").controller("teams"))
        .association_link_actions(vec![LinkAction::Show]);
    let html = render(&hero, &column);
    assert_eq!(html, "<a href=\"/teams/show/9?hero_id=5\" class=\"action\">Avengers</a>");
}
