//! Handler naming convention.

/// Prefix shared by every derived handler name.
pub const HANDLER_PREFIX: &str = "on";

/// Derive the handler name for a transition: `"on"` followed by the
/// transition name with its first character upper-cased.
///
/// ```rust
/// use tabstate::core::handler_name;
///
/// assert_eq!(handler_name("inject"), "onInject");
/// assert_eq!(handler_name("loadAndExecute"), "onLoadAndExecute");
/// assert_eq!(handler_name("Load"), "onLoad");
/// ```
pub fn handler_name(transition: &str) -> String {
    let mut chars = transition.chars();
    let mut name = String::with_capacity(HANDLER_PREFIX.len() + transition.len());
    name.push_str(HANDLER_PREFIX);
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_only_first_character() {
        assert_eq!(handler_name("melt"), "onMelt");
        assert_eq!(handler_name("loadAndExecute"), "onLoadAndExecute");
    }

    #[test]
    fn already_capitalized_names_collide() {
        assert_eq!(handler_name("load"), handler_name("Load"));
    }

    #[test]
    fn empty_name_yields_bare_prefix() {
        assert_eq!(handler_name(""), "on");
    }

    #[test]
    fn non_ascii_first_character_is_uppercased() {
        assert_eq!(handler_name("ärger"), "onÄrger");
    }
}
