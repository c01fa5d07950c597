//! Identifier derivation utilities.
//!
//! Entity kinds are CamelCase (`"HeroPower"`); request parameters and
//! foreign keys are snake_case (`"hero_power_id"`). These helpers derive
//! one from the other for the link renderer and element-id schemes.

/// Convert a CamelCase entity kind to snake_case.
///
/// # Examples
///
/// ```
/// use listgrid_core::snake_case;
///
/// assert_eq!(snake_case("Hero"), "hero");
/// assert_eq!(snake_case("HeroPower"), "hero_power");
/// assert_eq!(snake_case("already_snake"), "already_snake");
/// ```
#[must_use]
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Derive the foreign-key parameter name for an entity kind.
///
/// # Examples
///
/// ```
/// use listgrid_core::foreign_key_param;
///
/// assert_eq!(foreign_key_param("Hero"), "hero_id");
/// assert_eq!(foreign_key_param("HeroPower"), "hero_power_id");
/// ```
#[must_use]
pub fn foreign_key_param(entity: &str) -> String {
    let mut key = snake_case(entity);
    key.push_str("_id");
    key
}
