mod coloring;
mod crossover;
mod fitness;
mod graph;
mod greedy;
mod mutagen;
mod palette;
mod schedule;
mod selector;

pub use coloring::Coloring;
pub use fitness::conflicts;
pub use graph::{Edge, Graph, GraphError, VertexId};
pub use greedy::{GreedyColor, OVERFLOW_LABEL, greedy_coloring, greedy_conflicts};
pub use mutagen::{MutationRate, MutationRateOutOfRange};
pub use palette::{ColorId, Palette, PaletteError};
pub use schedule::{Schedule, ScheduleError};
pub use selector::{SelectionError, Selector};

pub(crate) use crossover::single_point;
