use anyhow::Result;
use chroma::Engine;
use chroma::instance::{self, LoadError};
use chroma::models::{Graph, MutationRate, Palette, Schedule, Selector};
use chroma::render::{Renderer, TextRenderer};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Session state behind the command loop. `graph` is `None` until the first
/// successful load; a failed re-load leaves an empty graph behind (the graph
/// is reset before the parse is attempted, matching the load contract).
struct Session {
    engine: Engine,
    graph: Option<Graph>,
}

impl Session {
    fn new(engine: Engine) -> Self {
        Self {
            engine,
            graph: None,
        }
    }

    fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        if !path.exists() {
            // No state change for a missing file
            return Err(LoadError::NotFound(path.to_path_buf()));
        }
        if self.graph.is_some() {
            self.graph = Some(Graph::empty());
        }

        let graph = instance::load_instance(path)?;
        self.graph = Some(graph);

        Ok(())
    }

    fn color(&self) -> io::Result<()> {
        let Some(graph) = &self.graph else {
            println!("No graph loaded. Use 'read <file>' first.");
            return Ok(());
        };

        let report = self.engine.run(graph);
        println!(
            "Best coloring after {} generation(s): {} conflict(s).",
            report.generations, report.conflicts
        );

        TextRenderer::new(io::stdout().lock()).render(graph, self.engine.palette(), &report.best)
    }
}

fn list() {
    match instance::list_instances(Path::new(".")) {
        Ok(names) if names.is_empty() => println!("No instances found."),
        Ok(names) => {
            println!("Available instances:");
            for name in names {
                println!("- {name}");
            }
        }
        Err(error) => println!("Error listing instances: {error}"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let engine = Engine::new(
        Palette::classic(),
        Schedule::generational(100, 20)?,
        Selector::tournament(3)?,
        MutationRate::new(0.05)?,
    )?;
    let mut session = Session::new(engine);

    let stdin = io::stdin();
    loop {
        println!("\nEnter a command: (list, read <file>, color, exit)");
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => continue,
            ["list"] => list(),
            ["read", file] => match session.load(Path::new(file)) {
                Ok(()) => {
                    let graph = session.graph.as_ref().expect("load just succeeded");
                    println!(
                        "Loaded '{file}': {} vertices, {} edges.",
                        graph.vertex_count(),
                        graph.edges().len()
                    );
                }
                Err(error) => println!("Error reading instance: {error}"),
            },
            ["color"] => session.color()?,
            ["exit"] => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid command. Use: list, read <file>, color or exit."),
        }
    }

    Ok(())
}
