use canvas_snake::app::App;
use canvas_snake::audio::SoundBank;
use canvas_snake::game::Settings;
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: 900,
        window_height: 720,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let settings = Settings::load_or_default();

    let seed = (macroquad::miniquad::date::now() * 1_000_000.0) as u64;
    macroquad::rand::srand(seed);

    let sounds = SoundBank::load(settings.sound_volume).await;
    let mut app = App::mount(settings, Box::new(sounds));

    loop {
        // There is nothing to quit to inside a browser tab
        if !cfg!(target_arch = "wasm32") && is_key_pressed(KeyCode::Escape) {
            break;
        }

        app.frame(get_time());
        next_frame().await;
    }

    app.teardown();
}
