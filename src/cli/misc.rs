use std::{fs::File, io::BufReader, path::Path};

use websat::{builder::ParserInfo, context::Context, types::err::ErrorKind};

/// Reads the DIMACS file at `path` into the context.
///
/// Files with an `xz` extension are decompressed, if the `xz` feature is enabled.
pub fn load_dimacs(context: &mut Context, path: &Path) -> Result<ParserInfo, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            println!("c Could not open {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            context.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }

        _ => context.read_dimacs(BufReader::new(&file)),
    }
}

/// Prints details of a parse as comments.
pub fn examine_parser_info(info: &ParserInfo) {
    if let (Some(atoms), Some(clauses)) = (info.expected_atoms, info.expected_clauses) {
        println!("c Expected {atoms} atoms and {clauses} clauses");
    }
    println!(
        "c Read {} atoms and {} clauses",
        info.added_atoms, info.added_clauses
    );
}

/// Prints counts from the solve as comments.
pub fn print_stats(context: &Context) {
    let counters = &context.counters;
    println!("c Conflicts:          {}", counters.total_conflicts);
    println!("c Decisions:          {}", counters.total_decisions);
    println!("c Random decisions:   {}", counters.random_decisions);
    println!("c Propagations:       {}", counters.total_propagations);
    println!("c Restarts:           {}", counters.restarts);
    println!("c Derived clauses:    {}", context.clause_db.addition_count());
    println!("c Time:               {:.2?}", counters.time);
}
