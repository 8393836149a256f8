mod application;
mod rendering;

use application::{Application, ParameterAction};
use std::time::{Duration, Instant};

use anyhow::Result;
use glium::{
    glutin::{
        dpi::PhysicalSize,
        event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent},
        event_loop::{ControlFlow, EventLoop},
        window::WindowBuilder,
        ContextBuilder,
    },
    Display, Surface,
};
use log::info;

fn main() -> Result<()> {
    pretty_env_logger::init();

    let (event_loop, display) = initialize_window();
    let mut app = Application::new(&display)?;

    print_instructions();

    info!("Starting event loop");
    let mut last_at = Instant::now();
    event_loop.run(move |ev, _, control_flow| {
        // delta time 計算
        let now = Instant::now();
        let delta = now - last_at;
        last_at = now;

        // tick 処理
        app.tick(delta);

        // 2 球のフォワードレンダリング
        let mut target = display.draw();
        target.clear_color_and_depth((0.12, 0.12, 0.12, 1.0), 1.0);
        app.draw(&mut target).expect("Failed to draw the frame");
        target.finish().expect("Failed to finish drawing display");

        // ウィンドウイベント
        let next_frame = now + Duration::from_micros(16_666);
        *control_flow = ControlFlow::WaitUntil(next_frame);
        match ev {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    if key == VirtualKeyCode::Escape {
                        *control_flow = ControlFlow::Exit;
                    } else if let Some(action) = map_key(key) {
                        app.apply_action(action);
                    }
                }
                _ => (),
            },
            _ => (),
        }
    });
}

/// キー入力をパラメーター操作に対応付ける。
fn map_key(key: VirtualKeyCode) -> Option<ParameterAction> {
    match key {
        VirtualKeyCode::Key1 => Some(ParameterAction::IncreaseDiffuse),
        VirtualKeyCode::Key2 => Some(ParameterAction::DecreaseDiffuse),
        VirtualKeyCode::Key3 => Some(ParameterAction::IncreaseShininess),
        VirtualKeyCode::Key4 => Some(ParameterAction::DecreaseShininess),
        VirtualKeyCode::R => Some(ParameterAction::Reset),
        _ => None,
    }
}

fn initialize_window() -> (EventLoop<()>, Display) {
    let event_loop = EventLoop::new();
    let wb = WindowBuilder::new()
        .with_title("Phong vs. Lambert")
        .with_resizable(false)
        .with_inner_size(PhysicalSize::new(800, 600));
    let cb = ContextBuilder::new().with_depth_buffer(24);
    let display = Display::new(wb, cb, &event_loop).expect("Failed to create display");
    info!(
        "Supported OpenGL version: {}",
        display.get_opengl_version_string()
    );

    (event_loop, display)
}

fn print_instructions() {
    println!();
    println!("=== Illumination Lab Controls ===");
    println!("1 : Increase Lambert diffuse coefficient (left sphere)");
    println!("2 : Decrease Lambert diffuse coefficient (left sphere)");
    println!("3 : Increase Phong shininess (right sphere)");
    println!("4 : Decrease Phong shininess (right sphere)");
    println!("r : Reset all parameters");
    println!("ESC : Exit");
    println!();
    println!("Left Sphere: Lambert Model (Diffuse only)");
    println!("Right Sphere: Phong Model (Ambient + Diffuse + Specular)");
    println!("=========================================");
    println!();
}
