mod dispatch_test;
mod exports_test;
mod init_test;
