/// 檔案存取介面；每次呼叫自行開啟並關閉檔案
pub trait Storage {
    fn read_file(&self, path: &str) -> std::io::Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> std::io::Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read_file(&self, path: &str) -> std::io::Result<Vec<u8>> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, data: &[u8]) -> std::io::Result<()> {
        (**self).write_file(path, data)
    }
}
