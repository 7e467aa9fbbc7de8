use macroquad::prelude::*;

use kokaton::actors::Score;

const SCORE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
const SCORE_FONT_SIZE: u16 = 50;
// 分数文字中心距左边与底边的距离
const SCORE_INSET: Vec2 = Vec2::new(100.0, 50.0);

// 界面文字，没有可用字体时退回内置字体
#[derive(Default)]
pub struct Ui {
    pub font: Option<Font>,
}

impl Ui {
    fn params(&self, size: u16, color: Color) -> TextParams<'_> {
        TextParams {
            font: self.font.as_ref(),
            font_size: size,
            color,
            ..Default::default()
        }
    }

    // 以给定点为中心绘制一行文字
    pub fn text_centered(&self, text: &str, center: Vec2, size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        let x = center.x - dims.width * 0.5;
        let y = center.y - dims.height * 0.5 + dims.offset_y;
        draw_text_ex(text, x, y, self.params(size, color));
    }

    // 左下角的分数
    pub fn score(&self, score: &Score, canvas_height: f32) {
        let center = vec2(SCORE_INSET.x, canvas_height - SCORE_INSET.y);
        self.text_centered(&score.label(), center, SCORE_FONT_SIZE, SCORE_COLOR);
    }
}
