//! Extract a template from two sentences and print it.

use tmplrev::{Template, detect, diff};

fn main() {
    let before = "Hello! there, I was been there aaa";
    let after = "Hello there, he was in there khs";

    let stream: Vec<String> = diff(before.split_whitespace(), after.split_whitespace())
        .map(|element| element.to_string())
        .collect();
    println!("Diff: {}", stream.join(" "));

    let template: Template<_> =
        detect(before.split_whitespace(), after.split_whitespace()).collect();
    for (i, chunk) in template.iter().enumerate() {
        println!("Chunk {i}: {:?} ... {:?}", chunk.left, chunk.right);
    }
    println!("Template: {template}");
}
