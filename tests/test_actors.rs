use kokaton::actors::*;
use kokaton::geometry::{check_bound, Rect};

use rand::rngs::StdRng;
use rand::SeedableRng;

const AREA: Rect = Rect::new(0, 0, 1600, 900);

fn keys(up: bool, down: bool, left: bool, right: bool) -> HeldKeys {
    HeldKeys { up, down, left, right }
}

fn bird_at_center() -> Bird {
    Bird::new((900, 400), (80, 80))
}

// ── Direction ─────────────────────────────────────────────────────────────────

#[test]
fn direction_delta_round_trips_for_all_eight() {
    for dir in Direction::ALL {
        let (dx, dy) = dir.delta();
        assert_eq!(Direction::from_delta(dx, dy), Some(dir));
    }
}

#[test]
fn zero_delta_has_no_direction() {
    assert_eq!(Direction::from_delta(0, 0), None);
}

#[test]
fn orientation_table_matches_sprite_layout() {
    assert_eq!(Direction::Left.orientation(), Orientation { mirrored: false, degrees: 0.0 });
    assert_eq!(Direction::Right.orientation(), Orientation { mirrored: true, degrees: 0.0 });
    assert_eq!(Direction::Up.orientation(), Orientation { mirrored: true, degrees: 90.0 });
    assert_eq!(Direction::UpLeft.orientation(), Orientation { mirrored: false, degrees: -45.0 });
    assert_eq!(Direction::DownLeft.orientation(), Orientation { mirrored: false, degrees: 45.0 });
}

#[test]
fn angle_follows_screen_up_as_positive() {
    assert_eq!(Direction::Right.angle_degrees(), 0.0);
    assert!((Direction::Up.angle_degrees() - 90.0).abs() < 1e-4);
    assert!((Direction::Down.angle_degrees() + 90.0).abs() < 1e-4);
    assert!((Direction::UpLeft.angle_degrees() - 135.0).abs() < 1e-4);
}

// ── Bird ──────────────────────────────────────────────────────────────────────

#[test]
fn bird_starts_facing_right() {
    let bird = bird_at_center();
    assert_eq!(bird.facing, Direction::Right);
    assert_eq!(bird.pose, Pose::Facing);
    assert_eq!(bird.rect().center(), (900, 400));
}

#[test]
fn bird_idle_keeps_position_and_facing() {
    let mut bird = bird_at_center();
    bird.update(&HeldKeys::default(), &AREA);
    assert_eq!(bird.rect().center(), (900, 400));
    assert_eq!(bird.facing, Direction::Right);
}

#[test]
fn bird_moves_diagonally_up_left() {
    let mut bird = bird_at_center();
    bird.update(&keys(true, false, true, false), &AREA);
    assert_eq!(bird.rect().center(), (899, 399));
    assert_eq!(bird.facing, Direction::UpLeft);
}

#[test]
fn opposite_keys_cancel_without_turning() {
    let mut bird = bird_at_center();
    bird.update(&keys(true, true, false, false), &AREA);
    assert_eq!(bird.rect().center(), (900, 400));
    assert_eq!(bird.facing, Direction::Right);

    bird.update(&keys(true, true, true, true), &AREA);
    assert_eq!(bird.rect().center(), (900, 400));
    assert_eq!(bird.facing, Direction::Right);
}

#[test]
fn blocked_move_is_reverted_but_turns() {
    let mut bird = Bird::new((40, 400), (80, 80)); // flush with the left edge
    bird.update(&keys(true, false, true, false), &AREA);
    // The whole diagonal step is undone, not just the x component.
    assert_eq!(bird.rect().center(), (40, 400));
    assert_eq!(bird.facing, Direction::UpLeft);
}

#[test]
fn bird_never_leaves_area() {
    let mut bird = Bird::new((1560, 860), (80, 80));
    for _ in 0..50 {
        bird.update(&keys(false, true, false, true), &AREA);
        assert_eq!(check_bound(&AREA, &bird.rect()), (true, true));
    }
}

#[test]
fn special_pose_lasts_until_movement() {
    let mut bird = bird_at_center();
    bird.celebrate();
    bird.update(&HeldKeys::default(), &AREA);
    assert_eq!(bird.pose, Pose::Victory);
    bird.update(&keys(false, false, false, true), &AREA);
    assert_eq!(bird.pose, Pose::Facing);
}

// ── Bomb ──────────────────────────────────────────────────────────────────────

#[test]
fn bomb_moves_by_velocity() {
    let mut bomb = Bomb::new((500, 500), 20, (1, -1), [255, 0, 0]);
    bomb.update(&AREA);
    assert_eq!(bomb.center(), (501, 499));
    assert_eq!(bomb.vel, (1, -1));
}

#[test]
fn bomb_reflects_at_right_edge() {
    // right edge exactly on the screen edge, heading right
    let mut bomb = Bomb::new((1580, 450), 20, (1, 1), [0, 255, 0]);
    assert_eq!(bomb.rect().right(), 1600);
    bomb.update(&AREA);
    assert!(bomb.vel.0 < 0);
    assert_eq!(bomb.vel.1, 1);
    assert_eq!(bomb.rect().right(), 1599);
}

#[test]
fn bomb_reflects_at_left_edge_without_drifting_out() {
    let mut bomb = Bomb::new((20, 450), 20, (-1, 1), [0, 0, 255]);
    assert_eq!(bomb.rect().left, 0);
    bomb.update(&AREA);
    assert_eq!(bomb.vel.0, 1);
    assert!(bomb.rect().left >= -1);
    for _ in 0..10 {
        bomb.update(&AREA);
        assert!(bomb.rect().left >= 0);
    }
}

#[test]
fn bomb_reflects_in_corner_on_both_axes() {
    let mut bomb = Bomb::new((20, 20), 20, (-1, -1), [255, 255, 0]);
    bomb.update(&AREA);
    assert_eq!(bomb.vel, (1, 1));
    assert_eq!(bomb.center(), (21, 21));
}

#[test]
fn bomb_outside_but_heading_inward_keeps_velocity() {
    let mut bomb = Bomb::new((10, 450), 20, (1, 1), [255, 0, 255]);
    assert!(bomb.rect().left < 0);
    bomb.update(&AREA);
    assert_eq!(bomb.vel.0, 1);
    assert_eq!(bomb.center(), (11, 451));
}

#[test]
fn bomb_stays_in_area_over_long_run() {
    let mut bomb = Bomb::new((800, 450), 50, (1, -1), [0, 255, 255]);
    for _ in 0..10_000 {
        bomb.update(&AREA);
        assert!(AREA.contains(&bomb.rect()), "{:?}", bomb.rect());
    }
}

#[test]
fn random_bombs_spawn_inside_and_clear_of_bird() {
    let mut rng = StdRng::seed_from_u64(42);
    let bird = bird_at_center().rect();
    for _ in 0..200 {
        let bomb = Bomb::random(&AREA, &bird, &mut rng);
        assert!(AREA.contains(&bomb.rect()));
        assert!(!bomb.rect().intersects(&bird));
        assert!((10..=50).contains(&bomb.radius));
        assert_eq!(bomb.vel.0.abs(), 1);
        assert_eq!(bomb.vel.1.abs(), 1);
        assert!(bomb::BOMB_COLORS.contains(&bomb.color));
    }
}

#[test]
fn random_bomb_gives_up_when_no_clear_spot_exists() {
    let mut rng = StdRng::seed_from_u64(1);
    let small = Rect::new(0, 0, 100, 100);
    // the keep-clear rect covers the whole area, so every attempt overlaps
    let bomb = Bomb::random(&small, &small, &mut rng);
    assert!(small.contains(&bomb.rect()));
}

// ── Beam ──────────────────────────────────────────────────────────────────────

#[test]
fn beam_spawns_at_leading_edge() {
    let bird = bird_at_center();
    let beam = Beam::fire(&bird, (40, 10));
    assert_eq!(beam.rect().center(), (940, 400));
    assert_eq!(beam.vel(), (1, 0));
}

#[test]
fn beam_follows_facing() {
    let mut bird = bird_at_center();
    bird.update(&keys(true, false, false, false), &AREA);
    let beam = Beam::fire(&bird, (40, 10));
    assert_eq!(beam.vel(), (0, -1));
    assert_eq!(beam.rect().center(), (900, 399 - 40));
    // rotated a quarter turn
    assert_eq!(beam.rect().size(), (10, 40));
}

#[test]
fn beam_travels_until_it_leaves() {
    let bird = bird_at_center();
    let mut beam = Beam::fire(&bird, (40, 10));
    let mut steps = 0;
    while beam.update(&AREA) {
        steps += 1;
        assert_eq!(beam.rect().center().0, 940 + steps);
    }
    assert_eq!(beam.rect().right(), 1601);
    assert_eq!(steps, 1600 - 960);
}

// ── Explosion ─────────────────────────────────────────────────────────────────

#[test]
fn explosion_lives_exactly_its_life() {
    let mut exp = Explosion::new((100, 100), (60, 60), 120);
    for _ in 0..119 {
        exp.update();
        assert!(!exp.is_finished());
    }
    exp.update();
    assert!(exp.is_finished());
    assert_eq!(exp.life, 0);
}

#[test]
fn explosion_blinks_every_ten_frames() {
    let mut exp = Explosion::new((100, 100), (60, 60), 120);
    exp.update(); // 119
    assert_eq!(exp.frame(), 1);
    for _ in 0..9 {
        exp.update();
    }
    assert_eq!(exp.life, 110);
    assert_eq!(exp.frame(), 1);
    exp.update(); // 109
    assert_eq!(exp.frame(), 0);
}

#[test]
fn explosion_is_centred_on_bomb() {
    let bomb = Bomb::new((300, 200), 25, (1, 1), [255, 0, 0]);
    let exp = Explosion::new(bomb.center(), (64, 48), 120);
    assert_eq!(exp.rect.center(), (300, 200));
}

// ── Score ─────────────────────────────────────────────────────────────────────

#[test]
fn score_counts_up_by_one() {
    let mut score = Score::new();
    assert_eq!(score.value(), 0);
    assert_eq!(score.label(), "Score: 0");
    score.score_up();
    score.score_up();
    assert_eq!(score.value(), 2);
    assert_eq!(score.label(), "Score: 2");
}
