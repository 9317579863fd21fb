use log::Level;

fn log(level: Level, message: &str) {
    log::log!(target: crate::MODULE_NAME, level, "{message}");
}

pub fn log_notice<T: AsRef<str>>(message: T) {
    log(Level::Info, message.as_ref());
}

pub fn log_debug<T: AsRef<str>>(message: T) {
    log(Level::Debug, message.as_ref());
}

pub fn log_warning<T: AsRef<str>>(message: T) {
    log(Level::Warn, message.as_ref());
}
