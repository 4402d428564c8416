//! Drives the browser wiring against the mock DOM and prints the page
//! state after each step.
//!
//! Run with: cargo run --example dom_shell

use pocket_calc::wasm::DomShell;

fn main() {
    let mut shell = DomShell::new();

    println!("-- 12 + 7.5 =");
    for key in ["1", "2", "+", "7", ".", "5", "Enter"] {
        shell.key(key);
    }
    print_page(&shell);

    println!("-- √ of the result, then M+");
    shell.click("btn-sqrt");
    shell.click("btn-m-plus");
    print_page(&shell);

    println!("-- divide by zero");
    for key in ["8", "/", "0", "Enter"] {
        shell.key(key);
    }
    print_page(&shell);
    for alert in shell.dom().alerts() {
        println!("alert: {alert}");
    }
}

fn print_page(shell: &DomShell) {
    println!("  previous: {:?}", shell.previous_text());
    println!("  current:  {:?}", shell.current_text());
    println!("  {}", shell.memory_text());
}
