use std::{
    fs::File,
    io::{
        self, BufRead, BufReader, BufWriter, Read, StdinLock, StdoutLock, Write, stdin, stdout,
    },
};

/// Path argument where `-` stands for a standard stream
macro_rules! define_path_or_std {
    ($name:ident, $std_enum:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            FilePath(String),
            $std_enum,
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    Self::$std_enum => write!(f, "-"),
                    Self::FilePath(value) => write!(f, "{value}"),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                if &value == "-" {
                    Self::$std_enum
                } else {
                    Self::FilePath(value)
                }
            }
        }
    };
}

define_path_or_std!(FileOrStdout, Stdout);
define_path_or_std!(FileOrStdin, Stdin);

impl FileOrStdout {
    pub fn create(&self) -> io::Result<Output> {
        match self {
            Self::FilePath(fp) => Ok(Output::File(BufWriter::new(File::create(fp)?))),
            Self::Stdout => Ok(Output::Stdout(stdout().lock())),
        }
    }
}

impl FileOrStdin {
    pub fn open(&self) -> io::Result<Input> {
        match self {
            Self::FilePath(fp) => Ok(Input::File(BufReader::new(File::open(fp)?))),
            Self::Stdin => Ok(Input::Stdin(stdin().lock())),
        }
    }
}

pub enum Output {
    File(BufWriter<File>),
    Stdout(StdoutLock<'static>),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.write(buf),
            Self::Stdout(fd) => fd.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::File(f) => f.flush(),
            Self::Stdout(fd) => fd.flush(),
        }
    }
}

pub enum Input {
    File(BufReader<File>),
    Stdin(StdinLock<'static>),
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(f) => f.read(buf),
            Self::Stdin(fd) => fd.read(buf),
        }
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::File(f) => f.fill_buf(),
            Self::Stdin(fd) => fd.fill_buf(),
        }
    }

    fn consume(&mut self, amount: usize) {
        match self {
            Self::File(f) => f.consume(amount),
            Self::Stdin(fd) => fd.consume(amount),
        }
    }
}
