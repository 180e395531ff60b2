//! Integration tests for sampling and raster preview
//!
//! Paintings are built from small synthetic images with known colours so the
//! sampled dots and rendered pixels can be checked exactly.

use ben_day::{BenDayError, Dot, DotColor, Painting, PaintingConfig};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::PathBuf;

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

// Helper to get a fresh scratch directory for file outputs
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ben-day-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// Helper to fill a rectangle on an image
fn draw_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

fn two_dot_painting() -> Painting {
    let mut painting = Painting::new(PaintingConfig::default(), (100, 100));
    painting.push(Dot::new(10, (10, 10), RED));
    painting.push(Dot::new(10, (50, 50), BLUE));
    painting
}

// ============================================================================
// Sampling Tests
// ============================================================================

#[test]
fn test_add_dot_takes_mode_of_block() {
    // [A, A, A, B, B]
    let mut block = RgbImage::from_pixel(5, 1, RED);
    draw_rect(&mut block, 3, 0, 2, 1, BLUE);

    let mut painting = Painting::new(PaintingConfig::default(), (5, 5));
    let id = painting.add_dot((2, 0), 5, &block).unwrap();

    assert_eq!(painting.dot(id).unwrap().color, DotColor::from(RED));
}

#[test]
fn test_add_dot_does_not_touch_block() {
    let mut block = RgbImage::from_pixel(3, 3, WHITE);
    block.put_pixel(1, 1, BLUE);
    let before = block.clone();

    let mut painting = Painting::new(PaintingConfig::default(), (3, 3));
    painting.add_dot((1, 1), 3, &block).unwrap();

    assert_eq!(block, before);
}

#[test]
fn test_sample_grid_preserves_sampling_order() {
    let mut img = RgbImage::from_pixel(30, 20, WHITE);
    draw_rect(&mut img, 10, 0, 10, 10, RED);
    draw_rect(&mut img, 0, 10, 10, 10, BLUE);

    let mut painting = Painting::new(PaintingConfig::default(), (20, 30));
    assert_eq!(painting.sample_grid(&img, 10).unwrap(), 6);

    let colors: Vec<DotColor> = painting.dots().iter().map(|d| d.color).collect();
    let expected: Vec<DotColor> = [WHITE, RED, WHITE, BLUE, WHITE, WHITE]
        .into_iter()
        .map(DotColor::from)
        .collect();
    assert_eq!(colors, expected);
    assert_eq!(painting.dots()[4].center, (15, 15));
}

#[test]
fn test_config_is_carried_unchanged() {
    let config = PaintingConfig {
        cluster_count: 3,
        color_spread_tolerance: 12,
        minimum_dot_size: 4,
    };
    let painting = Painting::new(config.clone(), (7, 9));
    assert_eq!(painting.config(), &config);
    assert_eq!(painting.dimensions(), (7, 9));
}

#[test]
fn test_empty_block_is_precondition_error() {
    let mut painting = Painting::new(PaintingConfig::default(), (3, 3));
    let result = painting.add_dot((0, 0), 1, &RgbImage::new(0, 0));
    assert!(matches!(result, Err(BenDayError::Precondition(_))));
}

// ============================================================================
// Raster Tests
// ============================================================================

#[test]
fn test_render_two_dot_scenario() {
    let img = two_dot_painting().render();
    assert_eq!(img.dimensions(), (100, 100));

    // disk centres and bounding box extremes
    for (cx, cy, color) in [(10, 10, RED), (50, 50, BLUE)] {
        assert_eq!(*img.get_pixel(cx, cy), color);
        assert_eq!(*img.get_pixel(cx - 5, cy), color);
        assert_eq!(*img.get_pixel(cx + 5, cy), color);
        assert_eq!(*img.get_pixel(cx, cy - 5), color);
        assert_eq!(*img.get_pixel(cx, cy + 5), color);
        assert_eq!(*img.get_pixel(cx + 6, cy), WHITE);
        assert_eq!(*img.get_pixel(cx, cy + 6), WHITE);
    }

    assert_eq!(*img.get_pixel(0, 0), WHITE);
    assert_eq!(*img.get_pixel(99, 99), WHITE);
    assert_eq!(*img.get_pixel(30, 30), WHITE);
}

#[test]
fn test_render_uses_height_width_order() {
    let mut painting = Painting::new(PaintingConfig::default(), (40, 60));
    painting.push(Dot::new(4, (55, 35), RED));
    let img = painting.render();

    assert_eq!(img.width(), 60);
    assert_eq!(img.height(), 40);
    assert_eq!(*img.get_pixel(55, 35), RED);
}

#[test]
fn test_make_image_writes_png() {
    let dir = scratch_dir("preview");
    let path = dir.join("preview.png");

    let painting = two_dot_painting();
    painting.make_image(&path).unwrap();

    let loaded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(loaded, painting.render());
}

#[test]
fn test_make_image_missing_directory_is_error() {
    let dir = scratch_dir("preview-missing");
    let path = dir.join("no-such-dir").join("preview.png");
    assert!(two_dot_painting().make_image(&path).is_err());
}
