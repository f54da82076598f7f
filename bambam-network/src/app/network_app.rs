use std::{fs::File, path::Path};

use clap::{Parser, Subcommand};

use super::{NetworkBuilder, NetworkSummary};
use crate::{
    config::NetworkImportConfiguration,
    model::{
        osm::NetworkSource,
        sink::{writer_ops, AuditSink, CsvAuditSink, CsvEdgeSink, EDGES_FILENAME},
        NetworkCliError,
    },
};

pub const SUMMARY_FILENAME: &str = "network-summary.json";

/// Command line tool for building a directed multimodal network dataset from OpenStreetMap ways
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct NetworkApp {
    #[command(subcommand)]
    pub op: NetworkOperation,
}

#[derive(Subcommand)]
pub enum NetworkOperation {
    /// build the network from an OSM .pbf extract
    Pbf {
        #[arg(long, help = "path to .pbf file for import")]
        pbf_file: String,
        #[arg(long, help = "path to file with bambam-network import parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for network dataset")]
        output_directory: String,
    },
    /// build the network from a JSON document of extracted nodes and ways
    Json {
        #[arg(long, help = "path to .json file with `nodes` and `ways` arrays")]
        json_file: String,
        #[arg(long, help = "path to file with bambam-network import parameters")]
        configuration_file: Option<String>,
        #[arg(long, help = "output path for network dataset")]
        output_directory: String,
    },
}

impl NetworkOperation {
    pub fn run(&self) -> Result<NetworkSummary, NetworkCliError> {
        let (source, configuration_file, output_directory) = match self {
            NetworkOperation::Pbf {
                pbf_file,
                configuration_file,
                output_directory,
            } => (
                NetworkSource::Pbf {
                    pbf_filepath: pbf_file.clone(),
                },
                configuration_file,
                output_directory,
            ),
            NetworkOperation::Json {
                json_file,
                configuration_file,
                output_directory,
            } => (
                NetworkSource::Json {
                    json_filepath: json_file.clone(),
                },
                configuration_file,
                output_directory,
            ),
        };
        let conf = match configuration_file {
            None => Ok(NetworkImportConfiguration::default()),
            Some(f) => {
                log::info!("reading bambam-network configuration from {f}");
                NetworkImportConfiguration::try_from(f)
            }
        }?;
        run_import(&source, &conf, Path::new(output_directory))
    }
}

/// imports the source, builds the network and writes the edge table, tag audit
/// files and a run summary to the output directory
pub fn run_import(
    source: &NetworkSource,
    conf: &NetworkImportConfiguration,
    out_path: &Path,
) -> Result<NetworkSummary, NetworkCliError> {
    let builder = NetworkBuilder::try_from(conf)?;
    let dataset = source.import()?;

    let sink = CsvEdgeSink::new(out_path, conf.srid, conf.overwrite)?;
    let mut audit_sink = if conf.write_audit {
        Some(CsvAuditSink::new(out_path, conf.overwrite)?)
    } else {
        None
    };
    let (_, summary) = builder.build(&dataset, sink, &mut audit_sink)?;
    audit_sink.finish()?;

    writer_ops::create_dirs(out_path)?;
    let summary_path = out_path.join(SUMMARY_FILENAME);
    let file = File::create(&summary_path)?;
    serde_json::to_writer_pretty(file, &summary)?;
    log::info!(
        "wrote {} edges to {}",
        summary.edges_emitted,
        out_path.join(EDGES_FILENAME).to_string_lossy()
    );
    Ok(summary)
}
