use hashtag_trends::{
    tokenize, Error, KeyValueStoreSources, SeedPosts, SourceGroup, StaticSourceGroup,
    TrendAggregator, TrendAggregatorConfig,
};
use log::{error, info};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};

struct CliOptions {
    tokenize_only: bool,
    with_seed: bool,
    store_path: Option<String>,
    config: TrendAggregatorConfig,
}

fn parse_args() -> Result<CliOptions, Error> {
    let mut options = CliOptions {
        tokenize_only: false,
        with_seed: false,
        store_path: None,
        config: TrendAggregatorConfig::default(),
    };

    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "tokenize" => options.tokenize_only = true,
            "--with-seed" => options.with_seed = true,
            "--store" => {
                options.store_path = Some(args.next().ok_or("--store requires a path")?);
            }
            "--limit" => {
                let limit = args.next().ok_or("--limit requires a value")?;
                options.config.trend_limit = limit
                    .parse()
                    .map_err(|e| Error::Other(format!("Invalid --limit `{}`: {}", limit, e)))?;
            }
            other => return Err(Error::Other(format!("Unknown argument `{}`", other))),
        }
    }

    Ok(options)
}

fn run() -> Result<(), Error> {
    let options = parse_args()?;

    // Read the input text from stdin
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    if options.tokenize_only {
        println!("{}", serde_json::to_string_pretty(&tokenize(&input))?);
        return Ok(());
    }

    // One document per non-empty line
    let stdin_group = StaticSourceGroup::new(
        "stdin",
        input.lines().filter(|line| !line.trim().is_empty()),
    );

    let store: BTreeMap<String, String> = match &options.store_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => BTreeMap::new(),
    };
    let store_sources = KeyValueStoreSources::new(&store);
    let seed_posts = SeedPosts::embedded();

    let mut groups: Vec<&dyn SourceGroup> = Vec::new();
    groups.push(&stdin_group);
    if options.with_seed {
        groups.extend(store_sources.groups_with_seed(&seed_posts));
    } else {
        groups.extend(store_sources.groups());
    }

    let mut aggregator = TrendAggregator::with_config(options.config);
    let trends = aggregator.recompute(&groups);

    info!("Ranked {} trend(s)", trends.len());

    for trend in trends {
        println!("{}: {}", trend.tag, trend.count);
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    env_logger::init();

    if let Err(e) = run() {
        error!("Error computing trends: {}", e);
        std::process::exit(1);
    }
}
