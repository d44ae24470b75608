//! Registry of the scaffold types offered to the user.

use std::sync::Arc;

use crate::error::GeneratorError;

use super::ScaffoldType;

/// Available scaffold types and the one selected for new models.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mesh_generator::scaffold::{OptionValue, ScaffoldRegistry, ScaffoldSettings, ScaffoldType};
///
/// #[derive(Debug)]
/// struct Line;
///
/// impl ScaffoldType for Line {
///     fn name(&self) -> &str {
///         "1D line"
///     }
///     fn parameter_set_names(&self) -> Vec<String> {
///         vec!["Default".to_string()]
///     }
///     fn default_options(&self, _parameter_set_name: &str) -> ScaffoldSettings {
///         ScaffoldSettings::from([("Length".to_string(), OptionValue::Real(1.0))])
///     }
///     fn ordered_option_names(&self) -> Vec<String> {
///         vec!["Length".to_string()]
///     }
/// }
///
/// let registry = ScaffoldRegistry::new(vec![Arc::new(Line)], "1D line")?;
/// assert_eq!(registry.default_type().name(), "1D line");
/// assert!(ScaffoldRegistry::new(vec![Arc::new(Line)], "2D plate").is_err());
/// # Ok::<(), mesh_generator::GeneratorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScaffoldRegistry {
    types: Vec<Arc<dyn ScaffoldType>>,
    default_index: usize,
}

impl ScaffoldRegistry {
    /// Creates a registry whose default type is `default_name`.
    pub fn new(
        types: Vec<Arc<dyn ScaffoldType>>,
        default_name: &str,
    ) -> Result<Self, GeneratorError> {
        if types.is_empty() {
            return Err(GeneratorError::EmptyRegistry);
        }
        let default_index = types
            .iter()
            .position(|scaffold_type| scaffold_type.name() == default_name)
            .ok_or_else(|| GeneratorError::unknown_scaffold_type(default_name))?;
        Ok(Self {
            types,
            default_index,
        })
    }

    /// Creates a registry whose default is the first type.
    pub fn with_first_default(types: Vec<Arc<dyn ScaffoldType>>) -> Result<Self, GeneratorError> {
        let Some(first) = types.first() else {
            return Err(GeneratorError::EmptyRegistry);
        };
        let name = first.name().to_string();
        Self::new(types, &name)
    }

    pub fn default_type(&self) -> Arc<dyn ScaffoldType> {
        Arc::clone(&self.types[self.default_index])
    }

    /// Looks up a scaffold type by name.
    pub fn find(&self, name: &str) -> Option<Arc<dyn ScaffoldType>> {
        self.types
            .iter()
            .find(|scaffold_type| scaffold_type.name() == name)
            .cloned()
    }

    /// Names of all scaffold types in registration order.
    pub fn names(&self) -> Vec<String> {
        self.types
            .iter()
            .map(|scaffold_type| scaffold_type.name().to_string())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ScaffoldType>> {
        self.types.iter()
    }
}
