// 固定步长调度：把不定长的渲染帧换算成整数个模拟步
#[derive(Clone, Debug)]
pub struct FixedStep {
    tick: f64,
    max_steps: u32,
    backlog: f64,
}

impl FixedStep {
    pub fn new(tick_rate: u32, max_steps: u32) -> Self {
        Self {
            tick: 1.0 / tick_rate.max(1) as f64,
            max_steps: max_steps.max(1),
            backlog: 0.0,
        }
    }

    // 累加帧耗时，返回本帧需要推进的步数；超出上限的积压直接丢弃
    pub fn advance(&mut self, frame_secs: f32) -> u32 {
        self.backlog += frame_secs.max(0.0) as f64;
        let due = (self.backlog / self.tick).floor();
        if due >= self.max_steps as f64 {
            self.backlog = 0.0;
            return self.max_steps;
        }
        self.backlog -= due * self.tick;
        due as u32
    }

    pub fn tick_secs(&self) -> f64 {
        self.tick
    }
}
