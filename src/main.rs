mod app;
mod assets;
mod render;
mod systems;
mod ui;

use kokaton::config::{window_conf, GameConfig};

#[macroquad::main(window_conf)]
// 程序入口：初始化日志与配置并启动游戏主循环
async fn main() {
    let _ = env_logger::Builder::from_default_env().try_init();
    let config = GameConfig::load_or_default();

    match app::run(config).await {
        Ok(outcome) => log::info!("finished: {outcome:?}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
