// Pure qualification pipeline and its models
pub mod scoring {
    pub use crate::scoring::*;
}

pub mod diagnosis {
    pub use crate::diagnosis::*;
}

pub mod recommendations {
    pub use crate::recommendations::*;
}

pub mod pipeline {
    pub use crate::pipeline::*;
}

pub mod models {
    pub use crate::models::*;
}
