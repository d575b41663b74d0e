//! Sprite image loading

use glam::IVec2;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

pub const PLAYER_IMAGE_PATH: &str = "assets/player.png";
pub const BALL_IMAGE_PATH: &str = "assets/ball.png";

/// A decoded image and its natural pixel size
pub struct Sprite {
    pub image: HtmlImageElement,
    pub natural_size: IVec2,
}

/// Load and decode an image; a missing or broken file is an error
pub async fn load_sprite(path: &str) -> Result<Sprite, String> {
    let image = HtmlImageElement::new()
        .map_err(|e| format!("Failed to create image element: {:?}", e))?;
    image.set_src(path);

    JsFuture::from(image.decode())
        .await
        .map_err(|e| format!("Image file not found: {} ({:?})", path, e))?;

    let natural_size = IVec2::new(image.natural_width() as i32, image.natural_height() as i32);
    if natural_size.x == 0 || natural_size.y == 0 {
        return Err(format!("Image file is empty: {}", path));
    }

    log::debug!("Loaded {} ({}x{})", path, natural_size.x, natural_size.y);
    Ok(Sprite {
        image,
        natural_size,
    })
}

/// Load the bat and ball sprites
pub async fn load_sprites() -> Result<(Sprite, Sprite), String> {
    let bat = load_sprite(PLAYER_IMAGE_PATH).await?;
    let ball = load_sprite(BALL_IMAGE_PATH).await?;
    Ok((bat, ball))
}
