// 概念模块
// 每个概念都是独立、单一职责的状态模块，在 app.rs 中实例化，在 routes 中同步

pub mod errors;
pub mod sessioning;

pub use errors::ConceptError;
pub use sessioning::{SessionDoc, SessioningConcept};
