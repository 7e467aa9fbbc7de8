use rand::Rng;

use crate::actors::{Beam, Bird, Bomb, Explosion, HeldKeys, Score};
use crate::config::{GameConfig, NUM_OF_BOMBS};
use crate::geometry::{check_collide, Rect};

// 精灵尺寸，由资源加载决定，模拟只需要宽高
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpriteMetrics {
    pub bird: (i32, i32),
    pub beam: (i32, i32),
    pub explosion: (i32, i32),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Running,
    GameOver,
    Quit,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

// 单步模拟的输入
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub held: HeldKeys,
    pub fire: bool,
    pub quit: bool,
}

// 单帧内发生的事件，供日志与表现层使用
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FrameEvent {
    QuitRequested,
    BeamFired,
    BeamExpired,
    BombDestroyed { center: (i32, i32), score: u32 },
    PlayerHit,
    ExplosionFinished,
}

// 世界状态：独占所有实体集合
#[derive(Clone, Debug)]
pub struct World {
    pub area: Rect,
    pub metrics: SpriteMetrics,
    pub explosion_life: i32,
    pub bird: Bird,
    pub bombs: Vec<Bomb>,
    pub beams: Vec<Beam>,
    pub explosions: Vec<Explosion>,
    pub score: Score,
    pub status: Status,
    pub frame: u64,
}

impl World {
    // 开局：放置玩家并随机生成炸弹
    pub fn new(config: &GameConfig, metrics: SpriteMetrics, rng: &mut impl Rng) -> Self {
        let mut world = Self::empty(config, metrics);
        let keep_clear = world.bird.rect();
        world.bombs = (0..NUM_OF_BOMBS)
            .map(|_| Bomb::random(&world.area, &keep_clear, rng))
            .collect();
        log::debug!("spawned {} bombs", world.bombs.len());
        world
    }

    // 只有玩家、没有炸弹的世界
    pub fn empty(config: &GameConfig, metrics: SpriteMetrics) -> Self {
        Self {
            area: config.area(),
            metrics,
            explosion_life: config.explosion_life,
            bird: Bird::new(config.player_start, metrics.bird),
            bombs: Vec::new(),
            beams: Vec::new(),
            explosions: Vec::new(),
            score: Score::new(),
            status: Status::Running,
            frame: 0,
        }
    }

    // 推进一步：输入、光束、炸弹（先判玩家再判光束）、爆炸、玩家；结束后不再推进
    pub fn step(&mut self, input: &FrameInput) -> Vec<FrameEvent> {
        let mut events = Vec::new();
        if self.status.is_terminal() {
            return events;
        }
        self.frame += 1;
        log::trace!("step: frame={} bombs={} beams={}", self.frame, self.bombs.len(), self.beams.len());

        if input.quit {
            self.status = Status::Quit;
            events.push(FrameEvent::QuitRequested);
            return events;
        }
        if input.fire {
            self.beams.push(Beam::fire(&self.bird, self.metrics.beam));
            events.push(FrameEvent::BeamFired);
        }

        self.update_beams(&mut events);
        self.update_bombs(&mut events);
        if self.status.is_terminal() {
            return events;
        }
        self.update_explosions(&mut events);
        self.bird.update(&input.held, &self.area);
        events
    }

    fn update_beams(&mut self, events: &mut Vec<FrameEvent>) {
        let area = self.area;
        let before = self.beams.len();
        self.beams.retain_mut(|beam| beam.update(&area));
        for _ in self.beams.len()..before {
            events.push(FrameEvent::BeamExpired);
        }
    }

    // 炸弹移动与碰撞，先记录待删除下标，遍历结束后统一压缩
    fn update_bombs(&mut self, events: &mut Vec<FrameEvent>) {
        let mut dead_bombs = vec![false; self.bombs.len()];
        let mut used_beams = vec![false; self.beams.len()];

        for (i, bomb) in self.bombs.iter_mut().enumerate() {
            bomb.update(&self.area);
            if check_collide(&bomb.rect(), &self.bird.rect()) {
                self.bird.hit();
                self.status = Status::GameOver;
                events.push(FrameEvent::PlayerHit);
                break;
            }
            let hit = self
                .beams
                .iter()
                .enumerate()
                .find(|(j, beam)| !used_beams[*j] && check_collide(&beam.rect(), &bomb.rect()));
            if let Some((j, _)) = hit {
                used_beams[j] = true;
                dead_bombs[i] = true;
                self.explosions
                    .push(Explosion::new(bomb.center(), self.metrics.explosion, self.explosion_life));
                self.score.score_up();
                self.bird.celebrate();
                events.push(FrameEvent::BombDestroyed {
                    center: bomb.center(),
                    score: self.score.value(),
                });
            }
        }

        compact(&mut self.bombs, &dead_bombs);
        compact(&mut self.beams, &used_beams);
    }

    fn update_explosions(&mut self, events: &mut Vec<FrameEvent>) {
        for explosion in &mut self.explosions {
            explosion.update();
        }
        let before = self.explosions.len();
        self.explosions.retain(|e| !e.is_finished());
        for _ in self.explosions.len()..before {
            events.push(FrameEvent::ExplosionFinished);
        }
    }
}

// 按标记删除元素，保持剩余元素顺序
fn compact<T>(items: &mut Vec<T>, removed: &[bool]) {
    let mut flags = removed.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}
