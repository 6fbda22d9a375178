/// Opaque handles returned by host collections.
///
/// Hosts store their objects in slot maps keyed by these types, so a handle
/// to a removed object never aliases a newer one.

use slotmap::new_key_type;

new_key_type! {
    /// Handle to an entity owned by the host's entity collection
    pub struct EntityHandle;

    /// Handle to a primitive owned by a host primitive collection
    /// (scene primitives or ground primitives)
    pub struct PrimitiveHandle;

    /// Handle to a data source attached to the host
    pub struct DataSourceHandle;

    /// Handle to an imagery layer in the host's layer stack
    pub struct ImageryLayerHandle;
}
