//! Browser-only: paints the default scene onto a real canvas.
//! Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use bounce_merge_engine::World;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

wasm_bindgen_test_configure!(run_in_browser);

fn context(width: u32, height: u32) -> CanvasRenderingContext2d {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas.get_context("2d").unwrap().unwrap().dyn_into().unwrap()
}

fn pixel(ctx: &CanvasRenderingContext2d, x: f64, y: f64) -> Vec<u8> {
    ctx.get_image_data(x, y, 1.0, 1.0).unwrap().data().to_vec()
}

#[wasm_bindgen_test]
fn draw_fills_each_live_ball_with_its_color() {
    let world = World::new(800, 600);
    let ctx = context(800, 600);
    world.draw(ctx.clone());

    for i in 0..world.body_count() {
        let hex = world.body_color(i);
        let r = u8::from_str_radix(&hex[1..3], 16).unwrap();
        let g = u8::from_str_radix(&hex[3..5], 16).unwrap();
        let b = u8::from_str_radix(&hex[5..7], 16).unwrap();
        let px = pixel(&ctx, world.body_x(i).floor(), world.body_y(i).floor());
        assert_eq!(&px[..], &[r, g, b, 255], "body {}", i);
    }
}

#[wasm_bindgen_test]
fn empty_canvas_stays_clear_off_the_balls() {
    let world = World::new(800, 600);
    let ctx = context(800, 600);
    world.draw(ctx.clone());
    assert_eq!(pixel(&ctx, 0.0, 0.0), vec![0, 0, 0, 0]);
}
