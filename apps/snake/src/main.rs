fn main() {
    #[cfg(feature = "audio")]
    let _audio = background_music();
    snake::run();
}

/// The player keeps playing for as long as the returned handle lives.
#[cfg(feature = "audio")]
fn background_music() -> neon_arcade::audio::Audio {
    let pp = neon_arcade::util::get_project_path();
    let mut audio = neon_arcade::audio::Audio::new();
    audio.add_track("Off My Skin", &format!("{}/assets/music/off_my_skin.mp3", pp));
    audio.add_track(
        "Shadow in My Veins",
        &format!("{}/assets/music/shadow_in_my_veins.mp3", pp),
    );
    audio.play();
    audio
}
