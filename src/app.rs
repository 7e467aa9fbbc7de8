use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use kokaton::clock::FixedStep;
use kokaton::config::GameConfig;
use kokaton::error::AssetError;
use kokaton::world::{FrameEvent, FrameInput, Status, World};

use crate::assets::{load_ui_font, Assets};
use crate::render::Screen;
use crate::systems::poll_input;
use crate::ui::Ui;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Quit { score: u32 },
    GameOver { score: u32 },
}

// 游戏主循环：采样输入，按固定步长推进模拟并渲染
pub async fn run(config: GameConfig) -> Result<Outcome, AssetError> {
    let ui = Ui {
        font: load_ui_font(&config.asset_dir).await,
    };
    let assets = Assets::load(&config)?;

    let mut rng = StdRng::from_entropy();
    let mut world = World::new(&config, assets.metrics(), &mut rng);
    let mut clock = FixedStep::new(config.tick_rate, config.max_steps_per_frame);
    let screen = Screen::new(&world.area);

    // 关闭窗口时交给主循环处理
    prevent_quit();
    log::info!(
        "game started: {}x{} at {} ticks/s",
        config.screen_width,
        config.screen_height,
        config.tick_rate
    );

    // 空格按下的那一帧可能不推进模拟，保留到下一次推进
    let mut pending_fire = false;
    loop {
        let input = poll_input();
        pending_fire |= input.fire;

        if input.quit {
            advance(&mut world, &FrameInput { quit: true, ..input });
        } else {
            for _ in 0..clock.advance(get_frame_time()) {
                let tick_input = FrameInput {
                    fire: std::mem::take(&mut pending_fire),
                    ..input
                };
                advance(&mut world, &tick_input);
                if world.status.is_terminal() {
                    break;
                }
            }
        }

        screen.draw_world(&ui, &assets, &world);

        match world.status {
            Status::Running => {}
            Status::Quit => {
                log::info!("quit with score {}", world.score.value());
                return Ok(Outcome::Quit {
                    score: world.score.value(),
                });
            }
            Status::GameOver => {
                log::info!("game over with score {}", world.score.value());
                hold(&screen, &ui, &assets, &world, config.game_over_hold_secs).await;
                return Ok(Outcome::GameOver {
                    score: world.score.value(),
                });
            }
        }

        next_frame().await;
    }
}

fn advance(world: &mut World, input: &FrameInput) {
    for event in world.step(input) {
        match event {
            FrameEvent::BombDestroyed { center, score } => {
                log::info!("bomb destroyed at {center:?}, score {score}")
            }
            FrameEvent::PlayerHit => log::info!("bird hit at frame {}", world.frame),
            FrameEvent::QuitRequested => log::info!("quit requested"),
            other => log::debug!("{other:?}"),
        }
    }
}

// 游戏结束画面停留一段时间
async fn hold(screen: &Screen, ui: &Ui, assets: &Assets, world: &World, secs: f32) {
    let until = get_time() + secs as f64;
    while get_time() < until {
        next_frame().await;
        screen.draw_world(ui, assets, world);
    }
}
