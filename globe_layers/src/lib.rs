/*!
# Globe Layers

Named layer management over an external 3D globe rendering host.

The host owns the scene (entities, primitives, ground primitives, data
sources, imagery layers); this crate keeps name-keyed registries over those
collections and offers simplified option objects for points, lines and
polygons.

## Architecture

- **SceneHost**: host trait handing out the five scene collections
- **SceneCollection**: add/remove/show contract of one host collection
- **Registry**: name to handles bookkeeping shared by every manager
- **Layers**: facade over the five managers with priority-ordered lookups
- **Viewer**: configured host plus layers and input listeners

Host implementations provide concrete collections (see `globe_layers_memory`
for an in-process one).
*/

// Internal modules
mod error;
mod sdk;
pub mod log;
pub mod collection;
pub mod registry;
pub mod graphics;
pub mod layers;
pub mod viewer;

// Main globe namespace module
pub mod globe {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging entry point
    pub use crate::sdk::Sdk;

    // Host contract and viewer
    pub use crate::viewer::{SceneHost, Viewer, ViewerConfig};

    // Layer facade
    pub use crate::layers::Layers;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Host collection sub-module
    pub mod collection {
        pub use crate::collection::*;
    }

    // Layer managers sub-module
    pub mod layers {
        pub use crate::layers::*;
    }

    // Graphic options sub-module
    pub mod graphics {
        pub use crate::graphics::*;
    }

    // Viewer sub-module
    pub mod viewer {
        pub use crate::viewer::*;
    }
}

// Re-export math library at crate root
pub use glam;
