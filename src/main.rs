use clap::{App, Arg, ArgMatches};
use std::fs;
use std::io;
use std::path::Path;
use std::process;

//===========================================================================//

fn main() {
    let matches = App::new("icogen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts a PNG or JPEG image into a multi-resolution ICO file")
        .arg(
            Arg::with_name("input")
                .required(true)
                .value_name("IMAGE")
                .help("Path of the PNG or JPEG image to convert"),
        )
        .arg(
            Arg::with_name("output")
                .required(true)
                .value_name("ICO")
                .help("Path of the ICO file to create"),
        )
        .arg(
            Arg::with_name("size")
                .takes_value(true)
                .value_name("PIXELS")
                .short("s")
                .long("size")
                .multiple(true)
                .number_of_values(1)
                .help("Adds an image size to generate, in pixels \
                       (default: 256 128 64 48 32 16)"),
        )
        .get_matches();
    if let Err(error) = run(&matches) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> io::Result<()> {
    let input = Path::new(matches.value_of("input").unwrap());
    let output = Path::new(matches.value_of("output").unwrap());
    let sizes = match matches.values_of("size") {
        Some(values) => {
            let mut sizes = Vec::<u32>::new();
            for value in values {
                match value.parse::<u32>() {
                    Ok(size) => sizes.push(size),
                    Err(_) => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("Invalid size value: {}", value),
                        ));
                    }
                }
            }
            sizes
        }
        None => icogen::DEFAULT_SIZES.to_vec(),
    };
    let image = icogen::load_image(input)?;
    let data = icogen::build_icon(&image, &sizes)?;
    fs::write(output, data)?;
    Ok(())
}

//===========================================================================//
