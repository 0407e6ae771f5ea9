//! CardCleaner - signature-driven card generation
//!
//! Inspect a signature or generate batches of random cards from the terminal.
//!
//! ## Usage
//!
//! ```
//! cardcleaner [OPTIONS]
//!
//! Options:
//!   --signature "a,b,c,d,e,f,g,h"   Inspect and generate one signature
//!   --random N                      Generate N random cards
//! ```
//!
//! Without options a single random card is generated.

use cardcleaner::{
    CardContent, CardGenerator, CardRarity, CardSignature, CardTemplate, GeneratedCard,
    RarityTally, RecordingRenderer, SignatureCardGenerator, compute_seed,
    determine_rarity, rarity_score,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

struct CliArgs {
    /// Signature to inspect, if given
    signature: Option<String>,
    /// Number of random cards to generate
    random: Option<usize>,
    /// Seed for random generation
    seed: Option<u64>,
    /// Content JSON to load instead of the builtin set
    content_file: Option<String>,
    /// Print generated cards as JSON
    json: bool,
}

/// One generated card as printed with `--json`.
#[derive(Serialize)]
struct CardReport<'a> {
    card: &'a GeneratedCard,
    template: &'a CardTemplate,
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = env::args().collect();
    let mut signature: Option<String> = None;
    let mut random: Option<usize> = None;
    let mut seed: Option<u64> = None;
    let mut content_file: Option<String> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--signature" | "-s" => {
                if i + 1 < args.len() {
                    signature = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --signature requires a value");
                    i += 1;
                }
            }
            "--random" | "-r" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<usize>() {
                        Ok(count) => random = Some(count),
                        Err(_) => eprintln!("Error: --random expects a count, got '{}'", args[i + 1]),
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --random requires a count");
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u64>() {
                        Ok(value) => seed = Some(value),
                        Err(_) => eprintln!("Error: --seed expects a number, got '{}'", args[i + 1]),
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --seed requires a number");
                    i += 1;
                }
            }
            "--content" => {
                if i + 1 < args.len() {
                    content_file = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --content requires a file path");
                    i += 1;
                }
            }
            "--json" => {
                json = true;
                i += 1;
            }
            "--help" | "-h" => {
                println!("CardCleaner - signature-driven card generation");
                println!();
                println!("Usage: cardcleaner [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --signature, -s \"a,b,c,d,e,f,g,h\"  Inspect one signature and generate its card"
                );
                println!("  --random, -r <N>                   Generate N random cards and tally rarities");
                println!("  --seed <S>                         Seed for --random (default: from entropy)");
                println!("  --content <file>                   Load content JSON instead of the builtin set");
                println!("  --json                             Print generated cards as JSON");
                println!("  --help, -h                         Show this help message");
                println!();
                println!("Signature values are clamped to [-1, 1].");
                println!("Set RUST_LOG=debug to see generation decisions on stderr.");
                process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    CliArgs {
        signature,
        random,
        seed,
        content_file,
        json,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Print what the content tables make of a signature.
fn print_inspection(content: &CardContent, signature: &CardSignature) {
    println!("{}", signature);
    println!("  Seed:   {}", compute_seed(signature));
    println!(
        "  Rarity: {} (score {:.3})",
        determine_rarity(signature),
        rarity_score(signature)
    );

    let aspects = signature.significant_aspects();
    if aspects.is_empty() {
        println!("  Aspects: none");
    } else {
        let names: Vec<String> = aspects
            .iter()
            .map(|(element, aspect)| format!("{} ({:.2})", aspect, signature.intensity(*element)))
            .collect();
        println!("  Aspects: {}", names.join(", "));
    }

    let matches = content.matching_base_types(signature);
    if matches.is_empty() {
        println!("  Matches: none");
        return;
    }
    println!("  Matches:");
    for base in matches {
        println!(
            "    {} [{:?}] weight {:.3}, distance {:.3}",
            base.type_name,
            base.category,
            base.match_weight(signature),
            signature.distance_to(&base.base_signature)
        );
        println!(
            "      rarity {}, value {:.1}, cost {}",
            base.actual_rarity(signature),
            base.actual_value(signature),
            base.base_cost
        );
        if !base.base_effect_template.is_empty() {
            println!("      {}", base.base_effect_template);
        }
        for text in base.effect_texts(signature) {
            println!("      - {}", text);
        }
    }
}

fn print_card(card: &GeneratedCard, template: &CardTemplate) {
    println!(
        "{} card (seed {}) from {}",
        card.rarity,
        card.seed,
        card.base_type.as_deref().unwrap_or("no base type")
    );
    for (name, layer) in template.layers() {
        if let Some(texture) = &layer.texture {
            println!("    {:<18} {}", name, texture);
        }
    }
    for emission in &card.gem_emissions {
        println!(
            "    gem_{} glow      ({:.2}, {:.2}, {:.2}) x {:.2}",
            emission.index,
            emission.color.r,
            emission.color.g,
            emission.color.b,
            emission.strength
        );
    }
}

fn print_json(reports: &[CardReport<'_>]) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

fn print_tally(tally: &RarityTally) {
    println!("Rarity distribution over {} cards:", tally.total());
    for rarity in CardRarity::ALL {
        println!(
            "  {:<10} {:>6} ({:>5.1}%)",
            rarity.name(),
            tally.count(rarity),
            tally.fraction(rarity) * 100.0
        );
    }
}

fn run_signature(generator: &SignatureCardGenerator, text: &str, json: bool) -> Result<(), String> {
    let signature = text
        .parse::<CardSignature>()
        .map_err(|err| format!("Error: {}", err))?;

    let mut renderer = RecordingRenderer::new();
    let mut template = CardTemplate::new();
    let card = generator.generate(&mut renderer, &signature, &mut template);

    if json {
        let report = CardReport {
            card: &card,
            template: &template,
        };
        return print_json(&[report]).map_err(|err| format!("Error: {}", err));
    }

    print_inspection(generator.content(), &signature);
    println!();
    print_card(&card, &template);
    println!("  Name label:      {}", renderer.name_text);
    println!("  Attribute label: {}", renderer.attribute_text);
    Ok(())
}

fn run_random(
    generator: &SignatureCardGenerator,
    count: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut tally = RarityTally::new();
    let cards = generator.generate_batch(&mut rng, count, &mut tally);

    if json {
        let reports: Vec<CardReport<'_>> = cards
            .iter()
            .map(|(template, card)| CardReport { card, template })
            .collect();
        return print_json(&reports).map_err(|err| format!("Error: {}", err));
    }

    if count <= 5 {
        for (template, card) in &cards {
            println!("{}", card.signature);
            print_card(card, template);
            println!();
        }
    }
    print_tally(&tally);
    Ok(())
}

fn main() {
    init_tracing();
    let args = parse_args();

    let content = match args.content_file.as_deref() {
        Some(path) => match CardContent::load(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Error: {}", err);
                process::exit(1);
            }
        },
        None => CardContent::with_builtin(),
    };
    let generator = SignatureCardGenerator::new(content);

    let result = match (&args.signature, args.random) {
        (Some(text), _) => run_signature(&generator, text, args.json),
        (None, Some(count)) => run_random(&generator, count, args.seed, args.json),
        (None, None) => run_random(&generator, 1, args.seed, args.json),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
