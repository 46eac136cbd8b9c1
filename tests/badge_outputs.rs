//! End-to-end artifact checks: render the default badge, export both files,
//! reload them, and verify dimensions plus overwrite-on-rerun behavior.

use badgegen::{export, Badge, BADGE_SIZE, ICO_SIZE};

fn hermetic_badge() -> Badge {
    // Skip system font lookup so the test does not depend on installed fonts.
    Badge { font_paths: Vec::new(), ..Badge::default() }
}

#[test]
fn exports_png_and_ico_with_expected_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("icons/badge.png");
    let ico = dir.path().join("icons/badge.ico");

    let img = hermetic_badge().render();
    export::write_png(&img, &png).unwrap();
    export::write_ico(&img, &ico).unwrap();

    assert!(png.metadata().unwrap().len() > 0, "png must be non-empty");
    assert!(ico.metadata().unwrap().len() > 0, "ico must be non-empty");

    let png_img = image::open(&png).unwrap();
    assert_eq!((png_img.width(), png_img.height()), (BADGE_SIZE, BADGE_SIZE));

    let ico_img = image::open(&ico).unwrap();
    assert_eq!((ico_img.width(), ico_img.height()), (ICO_SIZE, ICO_SIZE));
}

#[test]
fn rerun_overwrites_existing_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("badge.png");
    let ico = dir.path().join("badge.ico");

    let img = hermetic_badge().render();
    export::write_png(&img, &png).unwrap();
    export::write_ico(&img, &ico).unwrap();
    let first_len = png.metadata().unwrap().len();

    // Second run must succeed and land a fresh file in place.
    export::write_png(&img, &png).unwrap();
    export::write_ico(&img, &ico).unwrap();
    assert_eq!(png.metadata().unwrap().len(), first_len);

    let reloaded = image::open(&png).unwrap();
    assert_eq!((reloaded.width(), reloaded.height()), (BADGE_SIZE, BADGE_SIZE));
}

#[test]
fn different_letters_change_the_render() {
    let a = Badge { letter: 'P', ..hermetic_badge() }.render();
    let b = Badge { letter: 'B', ..hermetic_badge() }.render();
    assert_ne!(a, b, "letter choice must affect the canvas");
}
