//! End-to-end tests driving the library the way the CLI does.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use bitty::{
    write_image, Colour, Expr, Generation, GenerationParams, Operand, Operator, OutputFormat,
    Raster, TruncationPolicy,
};

#[test]
fn x_expression_two_by_one() {
    let generation = Generation::with_expr(Expr::operand(Operand::X), 0);
    let raster = generation.rasterize(2, 1, 0).unwrap();

    assert_eq!(raster.get(0, 0), Some(Colour::BLACK));
    assert_eq!(raster.get(1, 0), Some(Colour::WHITE));
    assert_eq!(generation.summary(), "x, c = 0");

    let dir = tempdir().unwrap();
    let path = dir.path().join("pair.bmp");
    write_image(&raster, OutputFormat::Bmp, generation.expr(), 0, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 62);
    // Black then white, then two padding bytes
    assert_eq!(&bytes[54..], &[0, 0, 0, 0xFF, 0xFF, 0xFF, 0, 0]);
}

#[test]
fn bmp_decodes_with_image_crate() {
    let params = GenerationParams {
        width: 37,
        height: 21,
        depth: 5,
        ..Default::default()
    };
    let generation = Generation::new(&params, 314).unwrap();
    let raster = generation.rasterize(37, 21, params.threshold).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("decoded.bmp");
    write_image(&raster, OutputFormat::Bmp, generation.expr(), generation.constant(), &path)
        .unwrap();

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.width(), 37);
    assert_eq!(img.height(), 21);

    for y in 0..21u32 {
        for x in 0..37u32 {
            let expected = raster.get(x as usize, y as usize).unwrap().to_rgb();
            assert_eq!(img.get_pixel(x, y).0, expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn xpm_rows_match_raster() {
    // ((x ^ y) & c)
    let expr = Expr::binary(
        Operator::BitAnd,
        Expr::binary(
            Operator::BitXor,
            Expr::operand(Operand::X),
            Expr::operand(Operand::Y),
        ),
        Expr::operand(Operand::C),
    );
    let generation = Generation::with_expr(expr, 200);
    let raster = generation.rasterize(16, 16, 100).unwrap();

    let dir = tempdir().unwrap();
    let path = dir.path().join("pattern.xpm");
    write_image(&raster, OutputFormat::Xpm, generation.expr(), 200, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("/* ((x ^ y) & c), c = 200 */"));

    let rows: Vec<&str> = content.lines().skip(6).take(16).collect();
    assert_eq!(rows.len(), 16);
    for (y, line) in rows.iter().enumerate() {
        let body = line.trim_end_matches(',').trim_matches('"');
        assert_eq!(body.len(), 16);
        for (x, key) in body.chars().enumerate() {
            let white = ((x ^ y) & 200) as i32 > 100;
            assert_eq!(key, if white { ' ' } else { '.' }, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn rendered_parens_count_operators() {
    for policy in [TruncationPolicy::Perfect, TruncationPolicy::Ragged] {
        for seed in 0..25 {
            let params = GenerationParams {
                depth: 7,
                randomness: 3,
                policy,
                ..Default::default()
            };
            let generation = Generation::new(&params, seed).unwrap();
            let text = generation.expr().render();

            assert_eq!(
                text.matches('(').count(),
                generation.expr().operator_count()
            );
        }
    }
}

#[test]
fn evaluation_is_total_for_random_trees() {
    let extremes = [i32::MIN, -65_536, -1, 0, 1, 255, i32::MAX];

    for seed in 0..40 {
        let params = GenerationParams {
            depth: 6,
            ..Default::default()
        };
        let generation = Generation::new(&params, seed).unwrap();
        for &x in &extremes {
            for &y in &extremes {
                for &c in &extremes {
                    let _ = generation.expr().eval(x, y, c);
                }
            }
        }
    }
}

#[test]
fn threshold_boundary_renders_black() {
    // (x + c) with c = 50: pixel x = 50 evaluates to exactly 100
    let expr = Expr::binary(
        Operator::Add,
        Expr::operand(Operand::X),
        Expr::operand(Operand::C),
    );
    let generation = Generation::with_expr(expr, 50);
    let raster = generation.rasterize(64, 1, 100).unwrap();

    assert_eq!(raster.get(50, 0), Some(Colour::BLACK));
    assert_eq!(raster.get(51, 0), Some(Colour::WHITE));
}

#[test]
fn negative_values_render_black() {
    // (x - c) is negative left of c
    let expr = Expr::binary(
        Operator::Sub,
        Expr::operand(Operand::X),
        Expr::operand(Operand::C),
    );
    let generation = Generation::with_expr(expr, 20);
    let raster = generation.rasterize(20, 1, 1).unwrap();

    assert!(raster.row(0).iter().all(|c| c.is_black()));
}

#[test]
fn raster_allocation_failure_is_reported() {
    let err = Raster::new(usize::MAX / 2, 3).unwrap_err();
    assert!(matches!(err, bitty::BittyError::Alloc { .. }));
}
