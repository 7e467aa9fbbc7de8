use macroquad::prelude::*;

use kokaton::actors::HeldKeys;
use kokaton::world::FrameInput;

// 采样本帧输入：方向键持续状态、空格发射、退出请求
pub fn poll_input() -> FrameInput {
    let held = HeldKeys {
        up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
        down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
        left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
    };
    FrameInput {
        held,
        fire: is_key_pressed(KeyCode::Space),
        quit: is_quit_requested() || is_key_pressed(KeyCode::Escape),
    }
}
