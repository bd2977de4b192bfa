//! Cursor restoration on panic and Ctrl+C

/// Ensure the terminal cursor comes back if a prompt is interrupted
pub fn install_terminal_guards() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        restore_cursor();
        std::process::exit(130);
    })
    .ok();
}

pub fn restore_cursor() {
    let _ = console::Term::stderr().show_cursor();
}
