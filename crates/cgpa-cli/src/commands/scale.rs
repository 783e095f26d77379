//! Grade scale command.

use anyhow::Result;
use cgpa_core::Grade;
use serde_json::json;

/// Print the grade-point scale
pub fn run(json: bool) -> Result<()> {
    if json {
        let scale: Vec<_> = Grade::ALL
            .iter()
            .map(|grade| json!({ "grade": grade.label(), "points": grade.points() }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&scale)?);
        return Ok(());
    }

    println!("GRADE  POINTS");
    for grade in Grade::ALL {
        println!("{:<6} {:>6.1}", grade.label(), grade.points());
    }
    println!("(any other grade counts as 0.0)");

    Ok(())
}
