use brunn_core::error::BrunnError;
use brunn_core::inference::{builtin, RandomForest};
use std::path::PathBuf;

pub fn inspect(file: Option<PathBuf>) -> Result<(), BrunnError> {
    let (forest, source) = match file {
        Some(path) => {
            let forest = RandomForest::load(&path)?;
            (forest, path.display().to_string())
        }
        None => (builtin::demo_forest()?, "bundled demo forest".to_string()),
    };

    println!("Forest: {}", source);
    println!("  trees:       {}", forest.n_trees());
    println!("  total nodes: {}", forest.total_nodes());
    println!("  max depth:   {}", forest.max_depth());
    Ok(())
}
