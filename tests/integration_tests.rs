//! End-to-end scenarios driving the engine the way a render loop does:
//! one reusable framebuffer image, sprites out of a cache, explicit
//! load/save at the edges.

use garnet::{Color, Image, ImageCache};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("garnet_{}_{}.tga", name, std::process::id()))
}

#[test]
fn sprite_blit_onto_a_framebuffer() {
    let mut framebuffer = Image::new(8, 8);
    framebuffer.fill(Color::BLACK);

    let mut sprite = Image::new(4, 4);
    sprite.fill(Color::RED);

    framebuffer.draw_image(&sprite, 2, 2);

    for y in 0..8 {
        for x in 0..8 {
            let expected = if (2..6).contains(&x) && (2..6).contains(&y) {
                Color::RED
            } else {
                Color::BLACK
            };
            assert_eq!(framebuffer.get(x, y), expected, "at ({x}, {y})");
        }
    }
}

#[test]
fn horizontal_line_on_a_blank_buffer() {
    let mut framebuffer = Image::new(8, 8);
    framebuffer.draw_line(0, 0, 3, 0, Color::WHITE);

    for y in 0..8 {
        for x in 0..8 {
            let expected = if y == 0 && x <= 3 {
                Color::WHITE
            } else {
                Color::TRANSPARENT
            };
            assert_eq!(framebuffer.get(x, y), expected, "at ({x}, {y})");
        }
    }
}

#[test]
fn tga_file_round_trip_preserves_opaque_content() {
    let path = temp_path("roundtrip");

    let mut img = Image::new(5, 4);
    for y in 0..4 {
        for x in 0..5 {
            img.set(x, y, Color::rgb((x * 40) as u8, (y * 60) as u8, 128));
        }
    }
    img.save_tga(&path).unwrap();

    let mut loaded = Image::default();
    loaded.load_tga(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!((loaded.width(), loaded.height()), (5, 4));
    // save and load each flip the rows, so the content comes back upright
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(loaded.get(x, y), img.get(x, y), "at ({x}, {y})");
        }
    }
}

#[test]
fn cached_sheet_drives_text_rendering() {
    let path = temp_path("font");

    // a 2-frames-per-row sheet of 2x2 cells: frame 0 red, frame 1 green
    let mut sheet = Image::new(4, 2);
    for x in 0..2 {
        sheet.set(x, 0, Color::RED);
        sheet.set(x, 1, Color::RED);
        sheet.set(x + 2, 0, Color::GREEN);
        sheet.set(x + 2, 1, Color::GREEN);
    }
    sheet.save_tga(&path).unwrap();

    let mut cache = ImageCache::new();
    let mut framebuffer = Image::new(8, 4);
    framebuffer.fill(Color::BLACK);

    {
        let font = cache.get(path.to_str().unwrap()).unwrap();
        framebuffer.draw_text("BA", 0, 0, font, 2, 2, b'A');
    }
    std::fs::remove_file(&path).unwrap();

    assert_eq!(framebuffer.get(0, 0), Color::GREEN);
    assert_eq!(framebuffer.get(2, 0), Color::RED);
    assert_eq!(framebuffer.get(4, 0), Color::BLACK);
    // the sheet stays cached even though the file is gone
    assert!(cache.get(path.to_str().unwrap()).is_ok());
}

#[test]
fn chroma_keyed_sprite_skips_masked_pixels() {
    let key = Color::PURPLE;

    let mut sprite = Image::new(2, 2);
    sprite.fill(key);
    sprite.set(0, 0, Color::YELLOW);
    sprite.mask_alpha(key);

    let mut framebuffer = Image::new(4, 4);
    framebuffer.fill(Color::BLUE);
    framebuffer.draw_image(&sprite, 1, 1);

    assert_eq!(framebuffer.get(1, 1), Color::YELLOW);
    // keyed-out pixels leave the background exactly as it was
    assert_eq!(framebuffer.get(2, 1), Color::BLUE);
    assert_eq!(framebuffer.get(1, 2), Color::BLUE);
    assert_eq!(framebuffer.get(2, 2), Color::BLUE);
}

#[test]
fn scaled_sprite_sheet_frame_composite() {
    // a sheet with one opaque frame and one half-transparent frame
    let mut sheet = Image::new(4, 2);
    for x in 0..2 {
        for y in 0..2 {
            sheet.set(x, y, Color::RED);
            sheet.set(x + 2, y, Color::rgba(200, 200, 200, 51));
        }
    }

    let mut framebuffer = Image::new(8, 8);
    framebuffer.fill(Color::rgb(100, 100, 100));

    let frame = sheet.frame_area(1, 2, 2);
    framebuffer.draw_image_part_scaled(&sheet, frame.x, frame.y, frame.w, frame.h, 0, 0, 4, 4);

    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(framebuffer.get(x, y), Color::rgb(120, 120, 120));
        }
    }
    assert_eq!(framebuffer.get(4, 4), Color::rgb(100, 100, 100));
}
