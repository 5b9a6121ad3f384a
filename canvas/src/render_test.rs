#![allow(clippy::float_cmp)]

use std::convert::Infallible;

use super::*;
use crate::model::{LocusCount, SceneConfig};

// =============================================================
// Recording painter
// =============================================================

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Reset,
    Fill { color: String, alpha: f64 },
    Camera(Camera),
    Stroke { count: usize, color: String, width: f64 },
    Dot { center: Point, radius: f64, color: String },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Painter for Recorder {
    type Error = Infallible;

    fn reset_transform(&mut self) -> Result<(), Infallible> {
        self.ops.push(Op::Reset);
        Ok(())
    }

    fn fill_screen(&mut self, color: &str, alpha: f64, _viewport: Viewport) -> Result<(), Infallible> {
        self.ops.push(Op::Fill { color: color.to_owned(), alpha });
        Ok(())
    }

    fn apply_camera(&mut self, camera: &Camera) -> Result<(), Infallible> {
        self.ops.push(Op::Camera(*camera));
        Ok(())
    }

    fn stroke_lines(&mut self, lines: &[Line], color: &str, width: f64) -> Result<(), Infallible> {
        self.ops.push(Op::Stroke { count: lines.len(), color: color.to_owned(), width });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Infallible> {
        self.ops.push(Op::Dot { center, radius, color: color.to_owned() });
        Ok(())
    }
}

/// Painter that fails on the first stroke.
struct FailingStroke {
    calls: usize,
}

impl Painter for FailingStroke {
    type Error = &'static str;

    fn reset_transform(&mut self) -> Result<(), &'static str> {
        self.calls += 1;
        Ok(())
    }

    fn fill_screen(&mut self, _: &str, _: f64, _: Viewport) -> Result<(), &'static str> {
        self.calls += 1;
        Ok(())
    }

    fn apply_camera(&mut self, _: &Camera) -> Result<(), &'static str> {
        self.calls += 1;
        Ok(())
    }

    fn stroke_lines(&mut self, _: &[Line], _: &str, _: f64) -> Result<(), &'static str> {
        Err("stroke failed")
    }

    fn fill_circle(&mut self, _: Point, _: f64, _: &str) -> Result<(), &'static str> {
        self.calls += 1;
        Ok(())
    }
}

const VIEWPORT: Viewport = Viewport { width: 640.0, height: 340.0 };

fn draw(scene: &SceneConfig, camera: &Camera) -> Vec<Op> {
    let mut rec = Recorder::default();
    let sides = crate::scene::active_sides(&scene.common, &scene.left, &scene.right);
    let Ok(()) = draw_frame(&mut rec, &scene.common, &sides, camera, VIEWPORT);
    rec.ops
}

fn dots(ops: &[Op]) -> Vec<&Op> {
    ops.iter().filter(|op| matches!(op, Op::Dot { .. })).collect()
}

fn strokes(ops: &[Op]) -> Vec<&Op> {
    ops.iter().filter(|op| matches!(op, Op::Stroke { .. })).collect()
}

// =============================================================
// Afterimage
// =============================================================

#[test]
fn background_alpha_is_complement_of_afterimage() {
    assert_eq!(background_alpha(0.0), 1.0);
    assert_eq!(background_alpha(1.0), 0.0);
    assert!((background_alpha(0.9) - 0.1).abs() < 1e-12);
}

#[test]
fn background_alpha_clamps_out_of_range() {
    assert_eq!(background_alpha(-3.0), 1.0);
    assert_eq!(background_alpha(7.0), 0.0);
}

#[test]
fn frame_starts_with_screen_space_fill() {
    let ops = draw(&SceneConfig::default(), &Camera::default());
    assert_eq!(ops[0], Op::Reset);
    let Op::Fill { color, alpha } = &ops[1] else {
        panic!("expected fill, got {:?}", ops[1]);
    };
    assert_eq!(color, "#000000");
    assert!((alpha - 0.1).abs() < 1e-12);
    assert_eq!(ops[2], Op::Camera(Camera::default()));
}

#[test]
fn initial_clear_is_opaque() {
    let mut rec = Recorder::default();
    let Ok(()) = draw_initial_clear(&mut rec, &CommonParams::default(), VIEWPORT);
    assert_eq!(rec.ops, vec![Op::Reset, Op::Fill { color: "#000000".into(), alpha: 1.0 }]);
}

// =============================================================
// Grid
// =============================================================

#[test]
fn grid_covers_identity_view() {
    let lines = grid_lines(&Camera::default(), VIEWPORT);
    // x = 0..=640 step 10, y = 0..=340 step 10
    assert_eq!(lines.len(), 65 + 35);
    assert_eq!(lines[0].from, Point::new(0.5, 0.0));
    assert_eq!(lines[0].to, Point::new(0.5, 340.0));
}

#[test]
fn grid_follows_pan() {
    let cam = Camera { tx: 25.0, ty: 0.0, scale: 1.0 };
    let lines = grid_lines(&cam, VIEWPORT);
    // visible world x starts at -25; first vertical line snaps down to -30
    assert_eq!(lines[0].from.x, -29.5);
}

#[test]
fn grid_stroke_width_is_one_screen_pixel() {
    let cam = Camera { tx: 0.0, ty: 0.0, scale: 2.0 };
    let ops = draw(&SceneConfig::default(), &cam);
    let Op::Stroke { color, width, .. } = &ops[3] else {
        panic!("expected grid stroke, got {:?}", ops[3]);
    };
    assert_eq!(color, "#333333");
    assert_eq!(*width, 0.5);
}

#[test]
fn hidden_grid_is_not_drawn() {
    let mut scene = SceneConfig::default();
    scene.common.grid.show = false;
    let ops = draw(&scene, &Camera::default());
    // chain + arm per side only
    assert_eq!(strokes(&ops).len(), 4);
}

// =============================================================
// Sides
// =============================================================

#[test]
fn z_order_is_chain_arm_origin_hand_poi_per_side() {
    let mut scene = SceneConfig::default();
    scene.common.grid.show = false;
    let ops = draw(&scene, &Camera::default());
    let tail: Vec<String> = ops[3..]
        .iter()
        .map(|op| match op {
            Op::Stroke { color, .. } | Op::Dot { color, .. } => color.clone(),
            other => format!("{other:?}"),
        })
        .collect();
    let side = ["#999999", "#ffffff", "#888888", "#00ffcc", "#ffcc00"];
    let expected: Vec<String> = side.iter().chain(side.iter()).map(|s| (*s).to_owned()).collect();
    assert_eq!(tail, expected);
}

#[test]
fn left_is_drawn_before_right() {
    let ops = draw(&SceneConfig::default(), &Camera::default());
    let d = dots(&ops);
    assert_eq!(d.len(), 6);
    let Op::Dot { center: left_poi, .. } = d[2] else { unreachable!() };
    let Op::Dot { center: right_poi, .. } = d[5] else { unreachable!() };
    assert!((left_poi.x - 460.0).abs() < 1e-9);
    assert!((right_poi.x - 180.0).abs() < 1e-9);
}

#[test]
fn dot_radius_is_object_size() {
    let ops = draw(&SceneConfig::default(), &Camera::default());
    let radii: Vec<f64> = dots(&ops)
        .iter()
        .map(|op| match op {
            Op::Dot { radius, .. } => *radius,
            _ => 0.0,
        })
        .collect();
    assert_eq!(radii, vec![2.0, 4.0, 10.0, 2.0, 4.0, 10.0]);
}

#[test]
fn hidden_poi_only_drops_the_poi() {
    let mut scene = SceneConfig::default();
    scene.left.object_visible.poi = false;
    let ops = draw(&scene, &Camera::default());
    assert_eq!(dots(&ops).len(), 5);
    assert_eq!(strokes(&ops).len(), 5);
}

#[test]
fn hidden_segments_are_skipped() {
    let mut scene = SceneConfig::default();
    scene.common.grid.show = false;
    scene.right.segment_visible.arm = false;
    scene.right.segment_visible.chain = false;
    let ops = draw(&scene, &Camera::default());
    assert_eq!(strokes(&ops).len(), 2);
    assert_eq!(dots(&ops).len(), 6);
}

fn gridless() -> SceneConfig {
    let mut scene = SceneConfig::default();
    scene.common.grid.show = false;
    scene
}

/// Draw `scene` and check the ops equal the unmodified frame with only the op
/// at `index` removed. Returns the removed op.
fn drops_exactly(baseline_scene: &SceneConfig, scene: &SceneConfig, index: usize) -> Op {
    let mut expected = draw(baseline_scene, &Camera::default());
    let removed = expected.remove(index);
    assert_eq!(draw(scene, &Camera::default()), expected);
    removed
}

#[test]
fn hiding_origin_drops_only_the_origin_dot() {
    let base = gridless();
    let mut scene = base.clone();
    scene.left.object_visible.origin = false;
    let pose = crate::scene::compose(&base.left, base.common.scale);
    let removed = drops_exactly(&base, &scene, 5);
    assert_eq!(removed, Op::Dot { center: pose.origin, radius: 2.0, color: "#888888".into() });
}

#[test]
fn hiding_hand_drops_only_the_hand_dot() {
    let base = gridless();
    let mut scene = base.clone();
    scene.left.object_visible.hand = false;
    let pose = crate::scene::compose(&base.left, base.common.scale);
    let removed = drops_exactly(&base, &scene, 6);
    assert_eq!(removed, Op::Dot { center: pose.hand, radius: 4.0, color: "#00ffcc".into() });
}

#[test]
fn hiding_poi_drops_only_the_poi_dot() {
    let base = gridless();
    let mut scene = base.clone();
    scene.left.object_visible.poi = false;
    let pose = crate::scene::compose(&base.left, base.common.scale);
    let removed = drops_exactly(&base, &scene, 7);
    assert_eq!(removed, Op::Dot { center: pose.poi, radius: 10.0, color: "#ffcc00".into() });
}

#[test]
fn hiding_chain_drops_only_the_chain_segment() {
    let base = gridless();
    let mut scene = base.clone();
    scene.left.segment_visible.chain = false;
    let removed = drops_exactly(&base, &scene, 3);
    assert_eq!(removed, Op::Stroke { count: 1, color: "#999999".into(), width: base.left.segment_size.chain });
}

#[test]
fn hiding_arm_drops_only_the_arm_segment() {
    let base = gridless();
    let mut scene = base.clone();
    scene.left.segment_visible.arm = false;
    let removed = drops_exactly(&base, &scene, 4);
    assert_eq!(removed, Op::Stroke { count: 1, color: "#ffffff".into(), width: base.left.segment_size.arm });
}

#[test]
fn hiding_grid_drops_only_the_grid_stroke() {
    let base = SceneConfig::default();
    let removed = drops_exactly(&base, &gridless(), 3);
    let Op::Stroke { count, color, width } = removed else {
        panic!("expected grid stroke, got {removed:?}");
    };
    assert_eq!(count, 65 + 35);
    assert_eq!(color, "#333333");
    assert_eq!(width, 1.0);
}

#[test]
fn hiding_right_poi_leaves_left_untouched() {
    let base = gridless();
    let mut scene = base.clone();
    scene.right.object_visible.poi = false;
    let pose = crate::scene::compose(&base.right, base.common.scale);
    let removed = drops_exactly(&base, &scene, 12);
    assert_eq!(removed, Op::Dot { center: pose.poi, radius: 10.0, color: "#ffcc00".into() });
}

#[test]
fn segment_uses_its_own_width() {
    let mut scene = SceneConfig::default();
    scene.common.grid.show = false;
    scene.left.segment_size.chain = 7.0;
    let ops = draw(&scene, &Camera::default());
    assert_eq!(ops[3], Op::Stroke { count: 1, color: "#999999".into(), width: 7.0 });
}

#[test]
fn single_locus_draws_one_side() {
    let mut scene = SceneConfig::default();
    scene.common.number_of_locus = LocusCount::One;
    let ops = draw(&scene, &Camera::default());
    assert_eq!(dots(&ops).len(), 3);
}

#[test]
fn painter_error_stops_the_frame() {
    let scene = SceneConfig::default();
    let sides = crate::scene::active_sides(&scene.common, &scene.left, &scene.right);
    let mut painter = FailingStroke { calls: 0 };
    let result = draw_frame(&mut painter, &scene.common, &sides, &Camera::default(), VIEWPORT);
    assert_eq!(result, Err("stroke failed"));
    // reset, fill, camera; no dots after the failing grid stroke
    assert_eq!(painter.calls, 3);
}
