pub mod remote_selection;
