pub mod key_set_service;
