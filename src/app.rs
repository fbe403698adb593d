// 应用由这里实例化的概念组合而成，并在 routes 中同步
// 目前只有 Sessioning

use crate::concepts::SessioningConcept;

#[derive(Debug, Clone, Default)]
pub struct Concepts {
    pub sessioning: SessioningConcept,
}

impl Concepts {
    pub fn new() -> Self {
        Self {
            sessioning: SessioningConcept::new(),
        }
    }
}
