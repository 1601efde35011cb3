use crate::error::{FilterError, FilterResult};
use crate::kernel::Kernel;
use crate::raster::{Image, PixelSource};
use crate::rgba::Rgba;

/// Map a neighborhood coordinate back into `[0, n)` toroidally.
fn wrap(v: i64, n: i64) -> usize {
    (((v % n) + n) % n) as usize
}

/// Filter `source` with `kernel`, producing a fresh image of the same
/// extent.
///
/// Per output pixel, every channel accumulates the kernel-weighted
/// neighborhood centered on the corresponding source coordinate, is scaled
/// by the kernel's factor, offset by its bias and clamped to [0, 255].
/// Neighborhoods wrap around the image edges instead of clamping or
/// zero-padding, and the output alpha is always fully opaque.
///
/// `width` and `height` must match the source's actual extent; a mismatch
/// fails before any output is allocated. Kernel shape preconditions are
/// enforced by [`Kernel::new`], the only way to obtain a kernel.
pub fn apply<S: PixelSource>(source: &S,
                             width: usize,
                             height: usize,
                             kernel: &Kernel) -> FilterResult<Image> {
    if width != source.width() || height != source.height() {
        return Err(FilterError::DimensionMismatch {
            stated_w: width,
            stated_h: height,
            actual_w: source.width(),
            actual_h: source.height(),
        });
    }

    let stride = kernel.stride();
    let half = kernel.center() as i64;

    Ok(Image::construct(width, height, |x, y| {
        let mut sum = Rgba::ZERO;
        for fy in 0..stride {
            for fx in 0..stride {
                let sx = wrap(x as i64 - half + fx as i64, width as i64);
                let sy = wrap(y as i64 - half + fy as i64, height as i64);
                sum = sum + source.pixel(sx, sy) * kernel.weight(fx, fy);
            }
        }
        sum.map(|channel| kernel.factor() * channel + kernel.bias())
            .quantize()
            .with_alpha(Rgba::OPAQUE)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{self, CATALOG};
    use rand::{Rng, thread_rng};

    fn noise(width: usize, height: usize) -> Image {
        Image::construct(width, height, |_, _| Rgba::opaque(
            thread_rng().gen_range(0..=255u8) as f64,
            thread_rng().gen_range(0..=255u8) as f64,
            thread_rng().gen_range(0..=255u8) as f64,
        ))
    }

    fn named(name: &str) -> &'static Kernel {
        &kernel::find(name)
            .expect("catalog entry")
            .kernel
    }

    #[test]
    fn identity_kernel_reproduces_the_source() {
        let source = noise(7, 5);
        let result = apply(&source, 7, 5, named("identity")).unwrap();
        assert_eq!(result, source);
    }

    #[test]
    fn repeated_application_is_deterministic() {
        let source = noise(16, 9);
        let blur = named("blur_gaussian");
        let first = apply(&source, 16, 9, blur).unwrap();
        let second = apply(&source, 16, 9, blur).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn output_matches_source_dimensions() {
        let source = noise(13, 4);
        for entry in CATALOG.iter() {
            let result = apply(&source, 13, 4, &entry.kernel).unwrap();
            assert_eq!(result.width(), 13, "{}", entry.name);
            assert_eq!(result.height(), 4, "{}", entry.name);
        }
    }

    #[test]
    fn oversaturated_sums_clamp_to_white() {
        let source = Image::from_pixel(1, 1, Rgba::gray(200.0));
        let doubling = Kernel::new(vec![vec![2.0]], 0.0, 1.0).unwrap();
        let result = apply(&source, 1, 1, &doubling).unwrap();
        assert_eq!(result[(0, 0)], Rgba::gray(255.0));
    }

    #[test]
    fn negative_sums_clamp_to_black() {
        let source = Image::from_pixel(1, 1, Rgba::gray(200.0));
        let negating = Kernel::new(vec![vec![-1.0]], 0.0, 1.0).unwrap();
        let result = apply(&source, 1, 1, &negating).unwrap();
        assert_eq!(result[(0, 0)], Rgba::gray(0.0));
    }

    #[test]
    fn bias_pushes_channels_past_the_clamp() {
        let source = Image::from_pixel(3, 3, Rgba::gray(200.0));
        let biased = Kernel::new(vec![
            vec![0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ], 100.0, 1.0).unwrap();
        let result = apply(&source, 3, 3, &biased).unwrap();
        assert_eq!(result[(1, 1)], Rgba::gray(255.0));
    }

    #[test]
    fn corner_neighborhoods_wrap_to_the_far_edge() {
        // distinct value per pixel so a wrong neighbor cannot alias a right one
        let source = Image::construct(3, 3, |x, y| Rgba::gray((10 * (3 * y + x)) as f64));
        // single weight at the window's top-left: output (x, y) reads (x-1, y-1)
        let shift = Kernel::new(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ], 0.0, 1.0).unwrap();
        let result = apply(&source, 3, 3, &shift).unwrap();
        assert_eq!(result[(0, 0)].red(), source[(2, 2)].red());
        assert_eq!(result[(1, 0)].red(), source[(0, 2)].red());
        assert_eq!(result[(0, 1)].red(), source[(2, 0)].red());
        assert_eq!(result[(1, 1)].red(), source[(0, 0)].red());
    }

    #[test]
    fn alpha_is_forced_opaque() {
        let source = Image::construct(4, 4, |x, y| Rgba::opaque(
            (x * 9) as f64,
            (y * 7) as f64,
            30.0,
        ).with_alpha(17.0));
        for entry in CATALOG.iter() {
            let result = apply(&source, 4, 4, &entry.kernel).unwrap();
            for x in 0..4 {
                for y in 0..4 {
                    assert_eq!(result[(x, y)].alpha(), Rgba::OPAQUE, "{}", entry.name);
                }
            }
        }
    }

    #[test]
    fn laplacian_on_a_checkerboard_matches_hand_computed_values() {
        let source = Image::construct(3, 3, |x, y| {
            Rgba::gray(if (x + y) % 2 == 0 { 255.0 } else { 0.0 })
        });
        let result = apply(&source, 3, 3, named("edge_laplacian")).unwrap();
        for x in 0..3 {
            for y in 0..3 {
                // white cells sum to -510 or -1020, black cells to 765;
                // both saturate, inverting the board
                let expected = if (x + y) % 2 == 0 { 0.0 } else { 255.0 };
                assert_eq!(result[(x, y)], Rgba::gray(expected), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn stated_dimensions_must_match_the_source() {
        let source = noise(4, 4);
        let err = apply(&source, 4, 5, named("identity")).unwrap_err();
        assert_eq!(err, FilterError::DimensionMismatch {
            stated_w: 4,
            stated_h: 5,
            actual_w: 4,
            actual_h: 4,
        });
    }
}
