// 击落炸弹的计数，只增不减
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_up(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn label(&self) -> String {
        format!("Score: {}", self.value)
    }
}
