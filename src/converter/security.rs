use crate::descriptor::SecurityRequirementDescriptor;
use crate::document::SecurityRequirement;

/// A requirement naming one scheme and the scopes needed from it
pub fn convert_security_requirement(descriptor: &SecurityRequirementDescriptor) -> SecurityRequirement {
    SecurityRequirement::new().add_list(descriptor.name.clone(), descriptor.scopes.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_security_requirement() {
        let requirement = convert_security_requirement(&SecurityRequirementDescriptor {
            name: "oauth".to_string(),
            scopes: vec!["widgets:read".to_string()],
        });

        assert_eq!(requirement.len(), 1);
        assert_eq!(
            requirement.scopes("oauth"),
            Some(&["widgets:read".to_string()][..])
        );
    }

    #[test]
    fn test_scheme_without_scopes() {
        let requirement = convert_security_requirement(&SecurityRequirementDescriptor {
            name: "api_key".to_string(),
            scopes: Vec::new(),
        });

        assert_eq!(requirement.scopes("api_key"), Some(&[][..]));
    }
}
