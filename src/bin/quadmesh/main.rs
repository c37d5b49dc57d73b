//! Quadmesh CLI - quadtree mesh generation command-line tool.
//!
//! Usage: quadmesh mesh [OPTIONS]
//!
//! Run `quadmesh --help` for available commands.

use std::time::Instant;

use clap::{Parser, Subcommand};

use quadmesh::prelude::*;
use std::result::Result;

#[derive(Parser)]
#[command(name = "quadmesh")]
#[command(author, version, about = "Quadtree mesh generation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition a domain and print the generated mesh
    Mesh {
        /// Domain width
        #[arg(long, default_value = "100")]
        width: f64,

        /// Domain height
        #[arg(long, default_value = "100")]
        height: f64,

        /// Maximum sample count a cell may hold before splitting
        #[arg(short, long, default_value = "1")]
        threshold: usize,

        /// Maximum subdivision depth
        #[arg(short = 'd', long, default_value = "5")]
        max_depth: usize,

        /// Add a circle: cx,cy,radius,material[,points]
        #[arg(long, value_name = "SPEC")]
        circle: Vec<String>,

        /// Add a square: cx,cy,side,material[,points]
        #[arg(long, value_name = "SPEC")]
        square: Vec<String>,

        /// Add a rectangle: cx,cy,width,height,material[,points]
        #[arg(long, value_name = "SPEC")]
        rect: Vec<String>,

        /// Print the node table
        #[arg(long)]
        nodes: bool,

        /// Print the element table
        #[arg(long)]
        elements: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Mesh {
            width,
            height,
            threshold,
            max_depth,
            circle,
            square,
            rect,
            nodes,
            elements,
        } => {
            let mut shapes = Vec::new();
            for spec in &circle {
                shapes.push(parse_circle(spec)?);
            }
            for spec in &square {
                shapes.push(parse_square(spec)?);
            }
            for spec in &rect {
                shapes.push(parse_rect(spec)?);
            }
            cmd_mesh(width, height, threshold, max_depth, shapes, nodes, elements)?;
        }
    }

    Ok(())
}

const DEFAULT_RESOLUTION: usize = 40;

fn parse_fields(spec: &str, min: usize, max: usize) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let fields: Vec<f64> = spec
        .split(',')
        .map(|f| f.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("bad shape spec '{}': {}", spec, e))?;
    if fields.len() < min || fields.len() > max {
        return Err(format!(
            "bad shape spec '{}': expected {} to {} comma-separated values",
            spec, min, max
        )
        .into());
    }
    Ok(fields)
}

fn parse_circle(spec: &str) -> Result<Shape, Box<dyn std::error::Error>> {
    let f = parse_fields(spec, 4, 5)?;
    let resolution = f.get(4).map_or(DEFAULT_RESOLUTION, |&n| n as usize);
    Ok(Shape::circle(f[0], f[1], f[2], f[3] as i32, resolution))
}

fn parse_square(spec: &str) -> Result<Shape, Box<dyn std::error::Error>> {
    let f = parse_fields(spec, 4, 5)?;
    let resolution = f.get(4).map_or(DEFAULT_RESOLUTION, |&n| n as usize);
    Ok(Shape::square(f[0], f[1], f[2], f[3] as i32, resolution))
}

fn parse_rect(spec: &str) -> Result<Shape, Box<dyn std::error::Error>> {
    let f = parse_fields(spec, 5, 6)?;
    let resolution = f.get(5).map_or(DEFAULT_RESOLUTION, |&n| n as usize);
    Ok(Shape::rectangle(f[0], f[1], f[2], f[3], f[4] as i32, resolution))
}

fn cmd_mesh(
    width: f64,
    height: f64,
    threshold: usize,
    max_depth: usize,
    shapes: Vec<Shape>,
    print_nodes: bool,
    print_elements: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = MeshOptions::default().with_max_depth(max_depth);
    let mut domain = DomainBox::new(width, height, shapes, options)?;

    let samples = sample_boundaries(domain.shapes());
    println!(
        "Domain: {} x {}, {} shapes, {} boundary samples",
        width,
        height,
        domain.shapes().len(),
        samples.len()
    );

    let start = Instant::now();
    domain.partition(threshold);
    let mesh = domain.generate_mesh();
    let elapsed = start.elapsed();

    println!(
        "Partitioned: {} cells (threshold={}, max_depth={})",
        domain.quadtree().num_cells(),
        threshold,
        max_depth
    );
    println!(
        "Mesh: {} nodes, {} elements ({:.2?})",
        mesh.num_nodes(),
        mesh.num_elements(),
        elapsed
    );

    if print_nodes {
        let per_node = domain.node_materials(&mesh);
        println!("\n{:>6} {:>12} {:>12}  materials", "node", "x", "y");
        for (node, materials) in mesh.nodes.iter().zip(&per_node) {
            println!(
                "{:>6} {:>12.4} {:>12.4}  {:?}",
                node.id.index(),
                node.position.x,
                node.position.y,
                materials
            );
        }
    }

    if print_elements {
        println!("\n{:>6}  nodes (BL BR TR TL)         materials", "elem");
        for element in &mesh.elements {
            let [bl, br, tr, tl] = element.nodes;
            println!(
                "{:>6}  {:>6} {:>6} {:>6} {:>6}  {:?}",
                element.id.index(),
                bl.index(),
                br.index(),
                tr.index(),
                tl.index(),
                element.materials
            );
        }
    }

    Ok(())
}
