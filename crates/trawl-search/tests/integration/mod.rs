mod call_convention;
mod count;
mod scope_and_path;
