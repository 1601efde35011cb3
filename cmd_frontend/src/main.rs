extern crate image_filtering;
extern crate image;

use std::path::PathBuf;

use image_filtering::convolve;
use image_filtering::kernel::{self, CATALOG};
use image_filtering::raster::Image;

fn main() {
    let mut args = std::env::args();
    args.next().unwrap();

    let src_uri = args.next()
        .expect("Expected source image");

    let mut out_dir = std::env::current_dir()
        .expect("Unable to open directory");
    let mut selected: Option<String> = None;

    for arg in args {
        let mut opt = arg.split('=');
        let command = opt.next().unwrap();
        match command {

            "--out" => {
                out_dir = PathBuf::from(opt.next()
                    .expect("Expected output directory"));
            },

            "--filter" => {
                let name = opt.next()
                    .expect("Expected filter name")
                    .to_string();
                kernel::find(&name)
                    .unwrap_or_else(|| panic!("Unknown filter '{}'", name));
                selected = Some(name);
            },

            unknown => panic!("Unexpected option '{}'", unknown)
        }
    }

    println!("Loading image {}", src_uri);

    let surface: Image = image::io::Reader::open(&src_uri)
        .expect(&format!("Unable to load image '{}'", src_uri))
        .decode()
        .unwrap()
        .into();

    let width = surface.width();
    let height = surface.height();
    println!("Loaded: {}x{}", width, height);

    for (idx, entry) in CATALOG.iter().enumerate() {
        if let Some(name) = selected.as_deref() {
            if name != entry.name {
                continue;
            }
        }

        println!("Applying {} (stride {}, bias {}, factor {})",
                 entry.name,
                 entry.kernel.stride(),
                 entry.kernel.bias(),
                 entry.kernel.factor());

        let result = convolve::apply(&surface, width, height, &entry.kernel)
            .unwrap_or_else(|e| panic!("Filter '{}' failed: {}", entry.name, e));

        let outfile = out_dir.join(format!("output_{}.png", idx));
        result.save(&outfile)
            .unwrap_or_else(|e| panic!("Unable to write '{}': {}", outfile.display(), e));
        println!("Saved {}", outfile.display());
    }
}
