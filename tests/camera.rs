use glam::Vec2;
use tilewalk::camera::Camera;

const VIEWPORT: Vec2 = Vec2::new(320.0, 240.0);

fn targets() -> Vec<Vec2> {
    let mut out = Vec::new();
    for x in (-100..800).step_by(37) {
        for y in (-100..600).step_by(41) {
            out.push(Vec2::new(x as f32, y as f32));
        }
    }
    out
}

#[test]
fn follow_centres_target() {
    let mut cam = Camera::new();
    cam.follow_target(Vec2::new(158.0, 88.0), VIEWPORT);
    assert_eq!(cam.offset, Vec2::new(2.0, 32.0));
    assert_eq!(cam.world_to_screen(Vec2::new(158.0, 88.0)), VIEWPORT / 2.0);
}

#[test]
fn constrained_offset_stays_inside_larger_world() {
    let world = Vec2::new(640.0, 480.0);
    for target in targets() {
        let mut cam = Camera::new();
        cam.follow_target(target, VIEWPORT);
        cam.constrain(world, VIEWPORT);
        assert!((-320.0..=0.0).contains(&cam.offset.x), "x {} for {target}", cam.offset.x);
        assert!((-240.0..=0.0).contains(&cam.offset.y), "y {} for {target}", cam.offset.y);
    }
}

#[test]
fn smaller_world_pins_axis_to_zero() {
    let world = Vec2::new(200.0, 480.0);
    for target in targets() {
        let mut cam = Camera::new();
        cam.follow_target(target, VIEWPORT);
        cam.constrain(world, VIEWPORT);
        assert_eq!(cam.offset.x, 0.0, "target {target}");
    }
}

#[test]
fn shorter_world_pins_y_to_zero() {
    let world = Vec2::new(640.0, 100.0);
    for target in targets() {
        let mut cam = Camera::new();
        cam.follow_target(target, VIEWPORT);
        cam.constrain(world, VIEWPORT);
        assert_eq!(cam.offset.y, 0.0, "target {target}");
        assert!((-320.0..=0.0).contains(&cam.offset.x), "x {} for {target}", cam.offset.x);
    }
}

#[test]
fn world_smaller_on_both_axes_never_scrolls() {
    let world = Vec2::new(200.0, 100.0);
    for target in targets() {
        let mut cam = Camera::new();
        cam.follow_target(target, VIEWPORT);
        cam.constrain(world, VIEWPORT);
        assert_eq!(cam.offset, Vec2::ZERO, "target {target}");
    }
}

#[test]
fn constrain_leaves_interior_offset_alone() {
    let mut cam = Camera::new();
    cam.follow_target(Vec2::new(408.0, 308.0), VIEWPORT);
    cam.constrain(Vec2::new(640.0, 480.0), VIEWPORT);
    assert_eq!(cam.offset, Vec2::new(-248.0, -188.0));
}

#[test]
fn screen_to_world_inverts_world_to_screen() {
    let cam = Camera { offset: Vec2::new(-37.0, -12.5) };
    let p = Vec2::new(90.0, 44.0);
    assert_eq!(cam.screen_to_world(cam.world_to_screen(p)), p);
}
