pub mod a001_laundry_transaction;
