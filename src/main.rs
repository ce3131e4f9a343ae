/// Put all the modules together: load matchups, train the classifier, report and predict
use std::error::Error;

use clap::{Args, Parser, Subcommand};
use log::{debug, info};

mod error;
mod io;
mod matchup;
mod matrix;
mod metrics;
mod model;
mod plot;
mod preprocess;
mod synth;

use matchup::{predict_winner, Combatant};
use model::{LogisticRegression, DEFAULT_COST_LOG_INTERVAL};
use plot::plot_cost_curve;
use preprocess::{load_dataset, Dataset, FEATURE_NAMES};

#[derive(Parser)]
#[command(name = "matchup_predictor")]
#[command(about = "Predict matchup winners with logistic regression", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on the first 80% of rows and evaluate on the rest
    Train(TrainArgs),
    /// Train, then predict the winner of one matchup
    Predict {
        #[command(flatten)]
        train: TrainArgs,
        #[arg(long)]
        hp1: f64,
        #[arg(long)]
        attack1: f64,
        #[arg(long)]
        hp2: f64,
        #[arg(long)]
        attack2: f64,
        #[arg(long, default_value = "first")]
        name1: String,
        #[arg(long, default_value = "second")]
        name2: String,
    },
    /// Write a synthetic matchup csv
    Generate {
        #[arg(long)]
        out: String,
        #[arg(long, default_value_t = 1000)]
        rows: usize,
        #[arg(long, default_value_t = synth::DEFAULT_SEED)]
        seed: u64,
    },
}

#[derive(Args)]
struct TrainArgs {
    /// Matchup csv with Index, Hp_1, Attack_1, Hp_2, Attack_2, Winner columns
    #[arg(long, default_value = "Pokemon_matchups.csv")]
    data: String,
    /// Row count used for the 80% split threshold (defaults to data rows in the file)
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long, default_value_t = 0.0001)]
    learning_rate: f64,
    #[arg(long, default_value_t = 50000)]
    iterations: usize,
    /// Iterations between two cost evaluations
    #[arg(long, default_value_t = DEFAULT_COST_LOG_INTERVAL)]
    log_every: usize,
    /// Save the cost curve to this PNG
    #[arg(long)]
    plot: Option<String>,
}

/// input: training arguments
/// output: the fitted model and the dataset it was trained on
/// logic: load and split the csv; fit on the train split; print weights and both accuracies;
/// optionally plot the cost curve
fn train(args: &TrainArgs) -> Result<(LogisticRegression, Dataset), Box<dyn Error>> {
    println!("Loading data from {}...", args.data);
    let dataset = load_dataset(&args.data, args.rows)?;

    let mut model = LogisticRegression::with_defaults(args.learning_rate, args.iterations)?
        .with_cost_log_interval(args.log_every)?;
    model.fit(&dataset.x_train, &dataset.y_train);

    println!("\nWeights:");
    for (name, w) in FEATURE_NAMES.iter().zip(model.weights().iter()) {
        println!("{:<30} {:>12.6}", name, w);
    }
    println!("{:<30} {:>12.6}", "bias", model.bias());

    if let Some(predictions) = &model.summary().predictions {
        debug!("training predictions:\n{}", predictions);
    }
    if let Some(acc) = model.summary().accuracy {
        println!("Training accuracy: {:.2}%", acc);
    }
    let (_, test_accuracy) = model.predict(&dataset.x_test, &dataset.y_test);
    println!("Test accuracy:     {:.2}%", test_accuracy);

    if let Some(path) = &args.plot {
        plot_cost_curve(&model.summary().cost_history, path)?;
        println!("Wrote {}", path);
    }

    Ok((model, dataset))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => {
            train(&args)?;
        }
        Commands::Predict { train: args, hp1, attack1, hp2, attack2, name1, name2 } => {
            let (model, _) = train(&args)?;
            let first = Combatant { name: name1, hp: hp1, attack: attack1 };
            let second = Combatant { name: name2, hp: hp2, attack: attack2 };
            let winner = predict_winner(&model, &first, &second);
            println!("\nPredicted winner: {}", winner.pick(&first, &second).name);
        }
        Commands::Generate { out, rows, seed } => {
            let records = synth::generate_matchups(rows, seed);
            io::write_csv(&out, &records)?;
            info!("generated {} rows with seed {}", rows, seed);
            println!("Wrote {}", out);
        }
    }

    Ok(())
}
