//! Demonstrate the one invalid argument the library rejects.

use tmplrev::{WindowError, overlapping_windows};

fn main() {
    match overlapping_windows(["a", "b", "c"], 0, None) {
        Ok(windows) => println!("Got {} window(s) (unexpected)", windows.len()),
        Err(WindowError::ZeroLength) => {
            let err = tmplrev::Error::from(WindowError::ZeroLength);
            println!("Window error: {err}");
        }
    }

    // A step of zero is not an error: it falls back to the length.
    let windows: Vec<_> = overlapping_windows(["a", "b", "c"], 2, Some(0))
        .expect("length is non-zero")
        .collect();
    println!("Step 0 behaves like step 2: {windows:?}");
}
