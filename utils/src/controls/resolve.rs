use ctrlmap_controls::{Resolution, Resolve};

pub fn controls_resolve<R: Resolve>(resolver: &R, romnames: &[String]) {
    for romname in romnames {
        match resolver.resolve(romname) {
            Resolution::Matched { descriptor, kind } => {
                tracing::info!("{} resolved as {}", romname, kind);

                match serde_json::to_string_pretty(&descriptor) {
                    Ok(json) => println!("{json}"),
                    Err(err) => tracing::error!("Could not print {}: {}", romname, err),
                }
            }
            Resolution::Unmatched => tracing::warn!("No controls known for {}", romname),
        }
    }
}

pub fn controls_coverage<R: Resolve>(resolver: &R, romnames: &[String]) {
    let report = resolver.coverage(romnames.iter().map(String::as_str));

    println!("{report}");
}
