use catalog_model::{ComponentConfig, DiagramDocument, Result};

/// Where catalog data comes from.
///
/// Implementations own all I/O; everything downstream works on the values
/// they return.
pub trait CatalogSource {
    /// Leaf component paths, in catalog order.
    fn list_component_paths(&self) -> Result<Vec<String>>;

    /// Load a component's configuration and diagram.
    ///
    /// Fails with [`CatalogError::NotFound`] when either resource is
    /// missing and [`CatalogError::Format`] when the configuration does not
    /// parse or has no columns or rows.
    ///
    /// [`CatalogError::NotFound`]: catalog_model::CatalogError::NotFound
    /// [`CatalogError::Format`]: catalog_model::CatalogError::Format
    fn load_component(&self, path: &str) -> Result<(ComponentConfig, DiagramDocument)>;
}

impl<S: CatalogSource + ?Sized> CatalogSource for &S {
    fn list_component_paths(&self) -> Result<Vec<String>> {
        (**self).list_component_paths()
    }

    fn load_component(&self, path: &str) -> Result<(ComponentConfig, DiagramDocument)> {
        (**self).load_component(path)
    }
}

impl<S: CatalogSource + ?Sized> CatalogSource for Box<S> {
    fn list_component_paths(&self) -> Result<Vec<String>> {
        (**self).list_component_paths()
    }

    fn load_component(&self, path: &str) -> Result<(ComponentConfig, DiagramDocument)> {
        (**self).load_component(path)
    }
}
