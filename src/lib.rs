// 游戏模拟部分，不依赖图形上下文；绘制、输入与资源加载在可执行程序中

pub mod actors;
pub mod clock;
pub mod config;
pub mod error;
pub mod geometry;
pub mod world;
