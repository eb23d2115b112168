mod request_caller;
