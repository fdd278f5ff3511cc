mod definition;
pub use definition::{ExecutorDefinition, ResourceRequest, TaskDefinition};

mod io;
pub use io::{TaskInput, TaskOutput};

mod state;
pub use state::LifecycleState;

mod view;
pub use view::{ExecutorRunLog, TaskCreated, TaskRunLog, TaskView};
