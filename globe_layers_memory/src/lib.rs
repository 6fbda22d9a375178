/*!
# Globe Layers Memory Host

In-process implementation of the `globe_layers` host contract.

Every scene collection lives in memory: objects are stored in slot maps,
stacking order is kept explicitly, and change events are counted so
batching can be observed. Data source documents are served from a
url-keyed table and parsed with `serde_json`.

Useful for headless tools and for testing layer bookkeeping without a
rendering host.
*/

mod memory_collection;
mod memory_imagery;
mod memory_scene;
mod memory_loader;

pub use memory_collection::{
    MemoryCollection, MemoryDataSources, MemoryEntities, MemoryItem, MemoryObject, MemoryPrimitives,
};
pub use memory_imagery::{LayerAdjustments, MemoryImageryLayers};
pub use memory_scene::MemoryScene;
pub use memory_loader::MemoryLoader;
