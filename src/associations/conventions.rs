//! Naming Conventions - declaration-time defaults for relation naming
//!
//! English-centric pluralization and the `{singular}_ids` foreign-key
//! pattern. These run only when associations are declared; the binding
//! engine itself works exclusively from resolved metadata.

/// Simple pluralization (English-centric)
pub fn pluralize(name: &str) -> String {
    if name.ends_with('y')
        && !name.ends_with("ay")
        && !name.ends_with("ey")
        && !name.ends_with("iy")
        && !name.ends_with("oy")
        && !name.ends_with("uy")
    {
        format!("{}ies", &name[..name.len() - 1])
    } else if name.ends_with('s')
        || name.ends_with("sh")
        || name.ends_with("ch")
        || name.ends_with('x')
        || name.ends_with('z')
    {
        format!("{}es", name)
    } else {
        format!("{}s", name)
    }
}

/// Simple singularization (English-centric)
pub fn singularize(name: &str) -> String {
    if name.ends_with("ies") {
        format!("{}y", &name[..name.len() - 3])
    } else if name.ends_with("ses")
        || name.ends_with("shes")
        || name.ends_with("ches")
        || name.ends_with("xes")
        || name.ends_with("zes")
    {
        name[..name.len() - 2].to_string()
    } else if name.ends_with('s') && name.len() > 1 {
        name[..name.len() - 1].to_string()
    } else {
        name.to_string()
    }
}

/// Conventional foreign-key attribute name for a model (e.g. `preference_ids`)
pub fn foreign_key_for(model: &str) -> String {
    format!("{}_ids", singularize(&model.to_lowercase()))
}

/// Conventional relation name for a model (e.g. `preferences`)
pub fn relation_name_for(model: &str) -> String {
    pluralize(&model.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("preference"), "preferences");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("class"), "classes");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("preferences"), "preference");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("classes"), "class");
    }

    #[test]
    fn test_foreign_key_for() {
        assert_eq!(foreign_key_for("Preference"), "preference_ids");
        assert_eq!(foreign_key_for("person"), "person_ids");
        assert_eq!(foreign_key_for("categories"), "category_ids");
    }

    #[test]
    fn test_relation_name_for() {
        assert_eq!(relation_name_for("Preference"), "preferences");
        assert_eq!(relation_name_for("tag"), "tags");
    }
}
